//! API error handling
//!
//! Every failure is answered with a JSON [`ErrorBody`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ip_core::error::{ErrorBody, IpError, ValidationErrors};

/// API error types
#[derive(Debug)]
pub enum ApiError {
    NotFound { resource: &'static str, id: String },
    Validation(ValidationErrors),
    /// The request body could not be read or decoded
    InvalidBody { status: StatusCode, message: String },
    Internal(String),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl std::fmt::Display) -> Self {
        ApiError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn invalid_body(status: StatusCode, msg: impl Into<String>) -> Self {
        ApiError::InvalidBody {
            status,
            message: msg.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidBody { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(self) -> ErrorBody {
        match self {
            ApiError::NotFound { resource, id } => {
                ErrorBody::new("NotFound", format!("{} with id {} not found", resource, id))
            }
            ApiError::Validation(errors) => {
                ErrorBody::new("PropertyConstraintViolation", errors.full_messages().join(", "))
                    .with_details(errors)
            }
            ApiError::InvalidBody { status, message } => {
                let kind = match status {
                    StatusCode::PAYLOAD_TOO_LARGE => "PayloadTooLarge",
                    StatusCode::UNSUPPORTED_MEDIA_TYPE => "UnsupportedMediaType",
                    _ => "InvalidRequestBody",
                };
                ErrorBody::new(kind, message)
            }
            ApiError::Internal(msg) => ErrorBody::new("InternalError", msg),
        }
    }
}

impl From<IpError> for ApiError {
    fn from(err: IpError) -> Self {
        match err {
            IpError::NotFound { entity, id } => ApiError::NotFound {
                resource: entity,
                id,
            },
            IpError::Validation(errors) => ApiError::Validation(errors),
            IpError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
