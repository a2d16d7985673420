//! CubeAI application composition root
//!
//! Composes the domain routers into a single application.

use axum::Router;
use cubeai_projects::ProjectsState;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use cubeai_common::Config;

/// Open the connection pool described by `config`
pub async fn connect_pool(config: &Config) -> Result<PgPool, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Create the main application router backed by PostgreSQL
pub fn create_app(pool: PgPool) -> Router {
    build_router(ProjectsState::from_pool(pool))
}

/// Compose domain routers with shared infrastructure routes
pub fn build_router(projects_state: ProjectsState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "CubeAI API v0.0.1-SNAPSHOT" }),
        )
        .merge(cubeai_projects::routes().with_state(projects_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
