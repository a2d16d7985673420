//! Project history repository
//!
//! Rows are insert-only; there is no update path.

use crate::domain::entities::{NewProjectHistory, Project, ProjectHistory};
use crate::repository::ProjectHistoryStore;
use cubeai_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct ProjectHistoryRepository {
    pool: PgPool,
}

impl ProjectHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectHistoryStore for ProjectHistoryRepository {
    async fn find_by_id(&self, project_history_id: i64) -> Result<Option<ProjectHistory>> {
        let history = sqlx::query_as::<_, ProjectHistory>(
            r#"
            SELECT id, project_id, structure, created_at
            FROM project_histories
            WHERE id = $1
            "#,
        )
        .bind(project_history_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(history)
    }

    async fn save(&self, history: NewProjectHistory) -> Result<ProjectHistory> {
        let created = sqlx::query_as::<_, ProjectHistory>(
            r#"
            INSERT INTO project_histories (project_id, structure)
            VALUES ($1, $2)
            RETURNING id, project_id, structure, created_at
            "#,
        )
        .bind(history.project_id)
        .bind(&history.structure)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_all_by_project(&self, project: &Project) -> Result<Vec<ProjectHistory>> {
        let histories = sqlx::query_as::<_, ProjectHistory>(
            r#"
            SELECT id, project_id, structure, created_at
            FROM project_histories
            WHERE project_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(project.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(histories)
    }
}
