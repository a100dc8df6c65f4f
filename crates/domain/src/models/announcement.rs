//! Announcement domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A site-wide announcement shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for publishing an announcement (admin console only).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateAnnouncementRequest {
    #[serde(deserialize_with = "shared::serde_helpers::trimmed")]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub content: String,
}

/// Response payload for announcements.
#[derive(Debug, Clone, Serialize)]
pub struct AnnouncementResponse {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Announcement> for AnnouncementResponse {
    fn from(a: Announcement) -> Self {
        Self {
            id: a.id,
            content: a.content,
            created_at: a.created_at,
        }
    }
}

/// Query parameters for the admin announcement list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminAnnouncementQuery {
    pub search: Option<String>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

impl AdminAnnouncementQuery {
    pub fn window(&self) -> super::CreatedWindow {
        super::CreatedWindow {
            created_from: self.created_from,
            created_to: self.created_to,
        }
    }
}
