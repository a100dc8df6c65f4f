//! Praise entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Praise;

/// Database row mapping for the praises table.
#[derive(Debug, Clone, FromRow)]
pub struct PraiseEntity {
    pub id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<PraiseEntity> for Praise {
    fn from(entity: PraiseEntity) -> Self {
        Self {
            id: entity.id,
            message: entity.message,
            created_at: entity.created_at,
        }
    }
}
