//! Projects domain state

use crate::repository::ProjectsRepositories;
use crate::service::ProjectService;
use sqlx::PgPool;

/// Application state for the Projects domain
#[derive(Clone)]
pub struct ProjectsState {
    pub service: ProjectService,
}

impl ProjectsState {
    pub fn new(service: ProjectService) -> Self {
        Self { service }
    }

    /// State backed by the PostgreSQL repositories
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(ProjectService::from_repositories(ProjectsRepositories::new(
            pool,
        )))
    }
}
