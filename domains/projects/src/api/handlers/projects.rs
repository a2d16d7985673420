//! Project API handlers
//!
//! - POST /v1/members/{member_id}/projects - Create a project
//! - GET /v1/members/{member_id}/projects - List a member's projects
//! - GET /v1/projects/{project_id} - Get a project

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use cubeai_common::{Result, ValidatedJson};

use crate::api::middleware::ProjectsState;
use crate::dto::{ProjectCreateRequest, ProjectResponse, ProjectSummaryResponse};

/// Create a new project for a member
pub async fn create_project(
    State(state): State<ProjectsState>,
    Path(member_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<ProjectCreateRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>)> {
    let created = state.service.create_project(member_id, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List projects owned by a member
pub async fn list_projects(
    State(state): State<ProjectsState>,
    Path(member_id): Path<i64>,
) -> Result<Json<Vec<ProjectSummaryResponse>>> {
    let projects = state.service.get_projects(member_id).await?;
    Ok(Json(projects))
}

/// Get a single project by ID
pub async fn get_project(
    State(state): State<ProjectsState>,
    Path(project_id): Path<i64>,
) -> Result<Json<ProjectResponse>> {
    let project = state.service.get_project(project_id).await?;
    Ok(Json(project))
}
