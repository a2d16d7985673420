//! Project history API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use cubeai_common::{Result, ValidatedJson};

use crate::api::middleware::ProjectsState;
use crate::dto::{
    ProjectHistoryDetailResponse, ProjectHistoryResponse, ProjectHistorySummaryResponse,
    ProjectSaveRequest,
};

/// Save a new snapshot of a project's structure
pub async fn save_project(
    State(state): State<ProjectsState>,
    Path(project_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<ProjectSaveRequest>,
) -> Result<(StatusCode, Json<ProjectHistoryResponse>)> {
    let saved = state.service.save_project(project_id, req).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// List a project's snapshots, newest first
pub async fn list_project_histories(
    State(state): State<ProjectsState>,
    Path(project_id): Path<i64>,
) -> Result<Json<Vec<ProjectHistorySummaryResponse>>> {
    let histories = state.service.get_project_history(project_id).await?;
    Ok(Json(histories))
}

/// Get one snapshot with its structure payload
pub async fn get_project_history_detail(
    State(state): State<ProjectsState>,
    Path(project_history_id): Path<i64>,
) -> Result<Json<ProjectHistoryDetailResponse>> {
    let detail = state
        .service
        .get_project_history_detail(project_history_id)
        .await?;
    Ok(Json(detail))
}
