//! Route definitions for Projects domain API

use axum::{routing::get, Router};

use super::handlers::{histories, projects};
use super::middleware::ProjectsState;

/// Create project routes
fn project_routes() -> Router<ProjectsState> {
    Router::new()
        .route(
            "/v1/members/{member_id}/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route("/v1/projects/{project_id}", get(projects::get_project))
}

/// Create project history routes
fn history_routes() -> Router<ProjectsState> {
    Router::new()
        .route(
            "/v1/projects/{project_id}/histories",
            get(histories::list_project_histories).post(histories::save_project),
        )
        .route(
            "/v1/project-histories/{project_history_id}",
            get(histories::get_project_history_detail),
        )
}

/// Create all Projects domain API routes
pub fn routes() -> Router<ProjectsState> {
    Router::new()
        .merge(project_routes())
        .merge(history_routes())
}
