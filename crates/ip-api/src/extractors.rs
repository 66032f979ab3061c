//! Axum state and extractors for API handlers

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::repository::{InMemoryProjectRepository, ProjectRepository};
use crate::service::ProjectService;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub projects: ProjectService,
}

impl AppState {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self {
            projects: ProjectService::new(repo),
        }
    }

    /// State backed by a fresh process-local store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProjectRepository::new()))
    }
}

/// JSON body whose rejections are answered with a structured error body
/// instead of axum's plain-text one, keeping the rejection's status
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(ApiError::invalid_body(rejection.status(), rejection.body_text())),
        }
    }
}
