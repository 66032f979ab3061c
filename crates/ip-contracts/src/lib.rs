//! # ip-contracts
//!
//! Contracts the reference service runs before it mutates a project.
//! Each contract inspects one input and either accepts it or returns every
//! problem it found as `ValidationErrors`.

pub mod base;
pub mod projects;

pub use base::*;
pub use projects::{ProgressReportContract, SubmitProjectContract, UpdateProjectContract};
