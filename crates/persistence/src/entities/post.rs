//! Post entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Post;

/// Database row mapping for the posts table.
#[derive(Debug, Clone, FromRow)]
pub struct PostEntity {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub achieved_at: String,
    pub content: String,
    pub image: Option<String>,
    pub video: Option<String>,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PostEntity> for Post {
    fn from(entity: PostEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            location: entity.location,
            achieved_at: entity.achieved_at,
            content: entity.content,
            image: entity.image,
            video: entity.video,
            is_blocked: entity.is_blocked,
            created_at: entity.created_at,
        }
    }
}
