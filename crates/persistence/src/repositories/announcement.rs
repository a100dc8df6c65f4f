//! Announcement repository for database operations.

use domain::models::CreatedWindow;
use sqlx::PgPool;

use super::contains_pattern;
use crate::entities::AnnouncementEntity;
use crate::metrics::QueryTimer;

/// Repository for announcement-related database operations.
#[derive(Clone)]
pub struct AnnouncementRepository {
    pool: PgPool,
}

impl AnnouncementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All announcements, newest first.
    pub async fn list(&self) -> Result<Vec<AnnouncementEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_announcements");
        let result = sqlx::query_as::<_, AnnouncementEntity>(
            r#"
            SELECT id, content, created_at
            FROM announcements
            ORDER BY created_at DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Announcements matching the admin console filters, newest first.
    pub async fn search(
        &self,
        search: Option<&str>,
        window: CreatedWindow,
    ) -> Result<Vec<AnnouncementEntity>, sqlx::Error> {
        let timer = QueryTimer::new("search_announcements");
        let result = sqlx::query_as::<_, AnnouncementEntity>(
            r#"
            SELECT id, content, created_at
            FROM announcements
            WHERE ($1::text IS NULL OR content ILIKE $1)
              AND ($2::timestamptz IS NULL OR created_at >= $2)
              AND ($3::timestamptz IS NULL OR created_at <= $3)
            ORDER BY created_at DESC, id ASC
            "#,
        )
        .bind(search.map(contains_pattern))
        .bind(window.created_from)
        .bind(window.created_to)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn create(&self, content: &str) -> Result<AnnouncementEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_announcement");
        let result = sqlx::query_as::<_, AnnouncementEntity>(
            r#"
            INSERT INTO announcements (content)
            VALUES ($1)
            RETURNING id, content, created_at
            "#,
        )
        .bind(content)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete an announcement.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_announcement");
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
