//! Project API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use ip_core::ProjectId;
use ip_models::{CreatedProject, ProgressReport, Project, ProjectUpdate};

use crate::error::ApiResult;
use crate::extractors::{AppState, JsonBody};

/// POST /api/projects
pub async fn create_project(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let id = state.projects.create().await?;
    Ok((StatusCode::CREATED, Json(CreatedProject { id })))
}

/// GET /api/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> ApiResult<Json<Project>> {
    Ok(Json(state.projects.get(&id).await?))
}

/// PUT /api/projects/:id
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
    JsonBody(update): JsonBody<ProjectUpdate>,
) -> ApiResult<StatusCode> {
    state.projects.update(&id, update).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/projects/:id/submit
pub async fn submit_project(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> ApiResult<StatusCode> {
    state.projects.submit(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/projects/:id/progress-reports
pub async fn create_progress_report(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
    JsonBody(report): JsonBody<ProgressReport>,
) -> ApiResult<StatusCode> {
    state.projects.append_progress_report(&id, report).await?;
    Ok(StatusCode::NO_CONTENT)
}
