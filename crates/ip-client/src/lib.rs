//! # ip-client
//!
//! Typed resource client for the project-tracking service.
//!
//! ## Example
//!
//! ```ignore
//! use ip_client::{ProjectApi, ProjectClient};
//! use ip_core::config::ClientConfig;
//! use ip_models::{ProjectBasicInfo, ProjectUpdate};
//!
//! let client = ProjectClient::new(&ClientConfig::new("http://localhost:8080/api"))?;
//! let created = client.create_project().await?;
//! client
//!     .update_project(&created.id, &ProjectUpdate::new().with_basic_info(ProjectBasicInfo::named("Bridge A")))
//!     .await?;
//! client.submit_project(&created.id).await?;
//! ```

pub mod client;
pub mod error;

pub use client::{ProjectApi, ProjectClient};
pub use error::{ClientError, ClientResult, ErrorKind};
