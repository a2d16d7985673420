//! Project repository

use crate::domain::entities::{Member, NewProject, Project};
use crate::repository::ProjectStore;
use cubeai_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectStore for ProjectRepository {
    async fn find_by_id(&self, project_id: i64) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, member_id, curriculum_id, created_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(project_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn save(&self, project: NewProject) -> Result<Project> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (member_id, curriculum_id)
            VALUES ($1, $2)
            RETURNING id, member_id, curriculum_id, created_at
            "#,
        )
        .bind(project.member_id)
        .bind(project.curriculum_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_all_by_member(&self, member: &Member) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, member_id, curriculum_id, created_at
            FROM projects
            WHERE member_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(member.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }
}
