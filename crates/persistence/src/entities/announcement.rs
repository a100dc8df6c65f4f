//! Announcement entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Announcement;

/// Database row mapping for the announcements table.
#[derive(Debug, Clone, FromRow)]
pub struct AnnouncementEntity {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<AnnouncementEntity> for Announcement {
    fn from(entity: AnnouncementEntity) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            created_at: entity.created_at,
        }
    }
}
