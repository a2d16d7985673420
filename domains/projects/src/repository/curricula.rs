//! Curriculum repository

use crate::domain::entities::Curriculum;
use crate::repository::CurriculumStore;
use cubeai_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct CurriculumRepository {
    pool: PgPool,
}

impl CurriculumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CurriculumStore for CurriculumRepository {
    async fn find_by_id(&self, curriculum_id: i64) -> Result<Option<Curriculum>> {
        let curriculum = sqlx::query_as::<_, Curriculum>(
            r#"
            SELECT id, title, description, created_at
            FROM curricula
            WHERE id = $1
            "#,
        )
        .bind(curriculum_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(curriculum)
    }
}
