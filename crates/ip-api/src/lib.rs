//! # ip-api
//!
//! Reference implementation of the project-tracking service.
//!
//! Serves the JSON contract under `/api`:
//!
//! | Method | Path | Body | Response |
//! |---|---|---|---|
//! | POST | `/projects` | none | 201 `{id}` |
//! | PUT | `/projects/{id}` | partial sections | 204 |
//! | POST | `/projects/{id}/submit` | none | 204 |
//! | POST | `/projects/{id}/progress-reports` | report | 204 |
//! | GET | `/projects/{id}` | none | 200 project |
//!
//! The service owns the draft/under-review lifecycle; storage is pluggable
//! through [`repository::ProjectRepository`].

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod repository;
pub mod routes;
pub mod service;

pub use extractors::AppState;
pub use routes::{app, router};
