//! Post repository for database operations.
//!
//! Public reads and writes only see visible posts (`is_blocked = false`).
//! The admin console reads every post and is the only writer of the
//! moderation flag.

use domain::models::post::{CreatePostRequest, UpdatePostRequest};
use domain::models::CreatedWindow;
use sqlx::PgPool;

use super::contains_pattern;
use crate::entities::PostEntity;
use crate::metrics::QueryTimer;

const POST_COLUMNS: &str =
    "id, title, location, achieved_at, content, image, video, is_blocked, created_at";

/// Admin console filters for posts.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Substring matched against title, location and content.
    pub search: Option<String>,
    pub is_blocked: Option<bool>,
    pub window: CreatedWindow,
}

/// Repository for post-related database operations.
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &CreatePostRequest) -> Result<PostEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_post");
        let result = sqlx::query_as::<_, PostEntity>(&format!(
            r#"
            INSERT INTO posts (title, location, achieved_at, content, image, video)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(&input.title)
        .bind(input.location.as_deref().unwrap_or_default())
        .bind(input.achieved_at.as_deref().unwrap_or_default())
        .bind(&input.content)
        .bind(input.image.as_deref())
        .bind(input.video.as_deref())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a post that is visible to the public.
    pub async fn find_visible_by_id(&self, id: i64) -> Result<Option<PostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_visible_post_by_id");
        let result = sqlx::query_as::<_, PostEntity>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1 AND is_blocked = false"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Visible posts, newest first.
    pub async fn list_visible(&self) -> Result<Vec<PostEntity>, sqlx::Error> {
        self.search(&PostFilter {
            is_blocked: Some(false),
            ..PostFilter::default()
        })
        .await
    }

    /// Posts matching the admin console filters, newest first.
    pub async fn search(&self, filter: &PostFilter) -> Result<Vec<PostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("search_posts");
        let result = sqlx::query_as::<_, PostEntity>(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE ($1::text IS NULL
                   OR title ILIKE $1 OR location ILIKE $1 OR content ILIKE $1)
              AND ($2::boolean IS NULL OR is_blocked = $2)
              AND ($3::timestamptz IS NULL OR created_at >= $3)
              AND ($4::timestamptz IS NULL OR created_at <= $4)
            ORDER BY created_at DESC, id ASC
            "#
        ))
        .bind(filter.search.as_deref().map(contains_pattern))
        .bind(filter.is_blocked)
        .bind(filter.window.created_from)
        .bind(filter.window.created_to)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Replace every writable field of a visible post.
    /// Omitted optional text becomes empty and omitted media is cleared.
    pub async fn replace(
        &self,
        id: i64,
        input: &CreatePostRequest,
    ) -> Result<Option<PostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("replace_post");
        let result = sqlx::query_as::<_, PostEntity>(&format!(
            r#"
            UPDATE posts SET
                title = $2,
                location = $3,
                achieved_at = $4,
                content = $5,
                image = $6,
                video = $7
            WHERE id = $1 AND is_blocked = false
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.title)
        .bind(input.location.as_deref().unwrap_or_default())
        .bind(input.achieved_at.as_deref().unwrap_or_default())
        .bind(&input.content)
        .bind(input.image.as_deref())
        .bind(input.video.as_deref())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a visible post (partial update).
    /// Only provided fields are updated; None values are preserved.
    /// An empty media reference clears the column.
    pub async fn update(
        &self,
        id: i64,
        input: &UpdatePostRequest,
    ) -> Result<Option<PostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_post");
        let result = sqlx::query_as::<_, PostEntity>(&format!(
            r#"
            UPDATE posts SET
                title = COALESCE($2, title),
                location = COALESCE($3, location),
                achieved_at = COALESCE($4, achieved_at),
                content = COALESCE($5, content),
                image = CASE WHEN $6::text = '' THEN NULL ELSE COALESCE($6, image) END,
                video = CASE WHEN $7::text = '' THEN NULL ELSE COALESCE($7, video) END
            WHERE id = $1 AND is_blocked = false
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(input.title.as_deref())
        .bind(input.location.as_deref())
        .bind(input.achieved_at.as_deref())
        .bind(input.content.as_deref())
        .bind(input.image.as_deref())
        .bind(input.video.as_deref())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Set the moderation flag of any post in a single statement.
    pub async fn set_blocked(
        &self,
        id: i64,
        is_blocked: bool,
    ) -> Result<Option<PostEntity>, sqlx::Error> {
        let timer = QueryTimer::new("set_post_blocked");
        let result = sqlx::query_as::<_, PostEntity>(&format!(
            "UPDATE posts SET is_blocked = $2 WHERE id = $1 RETURNING {POST_COLUMNS}"
        ))
        .bind(id)
        .bind(is_blocked)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a visible post.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete_visible(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_post");
        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND is_blocked = false")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
