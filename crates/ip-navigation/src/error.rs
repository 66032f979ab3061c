//! Navigation errors

use thiserror::Error;

use crate::mode::ViewModule;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route matches path {path}")]
    NotFound { path: String },

    #[error("unknown route name: {0}")]
    UnknownName(String),

    #[error("route name {0} is registered twice")]
    DuplicateName(String),

    #[error("route path {0} is registered twice")]
    DuplicatePath(String),

    #[error("invalid route path {path}: {reason}")]
    InvalidPath { path: String, reason: &'static str },
}

/// A view module could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load view {module}: {message}")]
pub struct ViewLoadError {
    pub module: ViewModule,
    pub message: String,
}

impl ViewLoadError {
    pub fn new(module: ViewModule, message: impl Into<String>) -> Self {
        Self {
            module,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Load(#[from] ViewLoadError),
}
