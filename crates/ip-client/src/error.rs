//! Client-side error taxonomy
//!
//! Every failure is surfaced as-is to the caller; nothing here retries.

use ip_core::config::ConfigError;
use ip_core::error::{ErrorBody, ValidationErrors};
use ip_core::ProjectId;
use reqwest::StatusCode;

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from the resource client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (unreachable, DNS, TLS, undecodable body)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response without a structured error body
    #[error("service error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The referenced project does not exist
    #[error("project {id} not found")]
    NotFound { id: ProjectId },

    /// The service rejected the payload content
    #[error("rejected by service: {0}")]
    Validation(ValidationErrors),

    #[error("invalid client configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Coarse classification callers usually branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    NotFound,
    Validation,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Request(_) | ClientError::Status { .. } | ClientError::Config(_) => {
                ErrorKind::Transport
            }
            ClientError::NotFound { .. } => ErrorKind::NotFound,
            ClientError::Validation(_) => ErrorKind::Validation,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Validation details, when the service supplied them
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ClientError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Turn a non-2xx response into the matching error
///
/// `id` is the project the request addressed; a 404 without one (project
/// creation) means the endpoint itself is missing, which is a transport
/// problem.
pub(crate) fn classify_failure(status: StatusCode, body: String, id: Option<&ProjectId>) -> ClientError {
    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return ClientError::NotFound { id: id.clone() };
        }
    }

    if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
        if let Ok(error) = serde_json::from_str::<ErrorBody>(&body) {
            let mut details = error.details;
            if details.is_empty() {
                details.add_base(error.message);
            }
            return ClientError::Validation(details);
        }
    }

    ClientError::Status {
        status: status.as_u16(),
        body,
    }
}
