//! Praise repository for database operations.

use sqlx::PgPool;

use super::contains_pattern;
use crate::entities::PraiseEntity;
use crate::metrics::QueryTimer;

/// Repository for praise-related database operations.
#[derive(Clone)]
pub struct PraiseRepository {
    pool: PgPool,
}

impl PraiseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, message: &str) -> Result<PraiseEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_praise");
        let result = sqlx::query_as::<_, PraiseEntity>(
            r#"
            INSERT INTO praises (message)
            VALUES ($1)
            RETURNING id, message, created_at
            "#,
        )
        .bind(message)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<PraiseEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_praise_by_id");
        let result = sqlx::query_as::<_, PraiseEntity>(
            "SELECT id, message, created_at FROM praises WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Praises newest first, optionally restricted to messages containing `search`.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<PraiseEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_praises");
        let result = sqlx::query_as::<_, PraiseEntity>(
            r#"
            SELECT id, message, created_at
            FROM praises
            WHERE ($1::text IS NULL OR message ILIKE $1)
            ORDER BY created_at DESC, id ASC
            "#,
        )
        .bind(search.map(contains_pattern))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a praise (admin moderation).
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_praise");
        let result = sqlx::query("DELETE FROM praises WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
