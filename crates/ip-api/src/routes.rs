//! API routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::extractors::AppState;
use crate::handlers::projects;

/// Create the complete API router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api", api_router())
}

/// The API router with its state attached
pub fn app(state: AppState) -> Router {
    router().with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new().nest("/projects", projects_router())
}

fn projects_router() -> Router<AppState> {
    Router::new()
        .route("/", post(projects::create_project))
        .route("/:id", get(projects::get_project).put(projects::update_project))
        .route("/:id/submit", post(projects::submit_project))
        .route("/:id/progress-reports", post(projects::create_progress_report))
}
