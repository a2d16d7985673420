//! Member repository

use crate::domain::entities::Member;
use crate::repository::MemberStore;
use cubeai_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MemberStore for MemberRepository {
    async fn find_by_id(&self, member_id: i64) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, oauth_id, nickname, profile_url, created_at
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }
}
