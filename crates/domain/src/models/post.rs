//! Portfolio post domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A portfolio entry describing a delivered project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub location: String,
    /// Free-form completion date, e.g. "2024년 3월".
    pub achieved_at: String,
    pub content: String,
    pub image: Option<String>,
    pub video: Option<String>,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a post, also used for full replacement (PUT).
///
/// Moderation state is not part of this payload; it can only be changed from
/// the admin console. Text is trimmed on decode and blank media references
/// are treated as absent.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreatePostRequest {
    #[serde(deserialize_with = "shared::serde_helpers::trimmed")]
    #[validate(
        length(max = 255, message = "Title must be at most 255 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: String,

    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(length(max = 100, message = "Achieved at must be at most 100 characters"))]
    pub achieved_at: Option<String>,

    #[serde(deserialize_with = "shared::serde_helpers::trimmed")]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub content: String,

    #[serde(default, deserialize_with = "shared::serde_helpers::non_blank_option")]
    #[validate(custom(function = "shared::validation::validate_media_reference"))]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "shared::serde_helpers::non_blank_option")]
    #[validate(custom(function = "shared::validation::validate_media_reference"))]
    pub video: Option<String>,
}

/// Request payload for partially updating a post (PATCH).
///
/// Absent or `null` fields are left unchanged. An empty `image` or `video`
/// clears the stored reference.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdatePostRequest {
    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(
        length(max = 255, message = "Title must be at most 255 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(length(max = 100, message = "Achieved at must be at most 100 characters"))]
    pub achieved_at: Option<String>,

    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub content: Option<String>,

    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(custom(function = "shared::validation::validate_media_patch"))]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "shared::serde_helpers::trimmed_option")]
    #[validate(custom(function = "shared::validation::validate_media_patch"))]
    pub video: Option<String>,
}

impl UpdatePostRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.location.is_none()
            && self.achieved_at.is_none()
            && self.content.is_none()
            && self.image.is_none()
            && self.video.is_none()
    }
}

/// Request payload for the admin moderation toggle.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SetPostBlockedRequest {
    pub is_blocked: bool,
}

/// Response payload for post operations.
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
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

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            location: p.location,
            achieved_at: p.achieved_at,
            content: p.content,
            image: p.image,
            video: p.video,
            is_blocked: p.is_blocked,
            created_at: p.created_at,
        }
    }
}

/// Query parameters for the admin post list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminPostQuery {
    pub search: Option<String>,
    pub is_blocked: Option<bool>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

impl AdminPostQuery {
    pub fn window(&self) -> super::CreatedWindow {
        super::CreatedWindow {
            created_from: self.created_from,
            created_to: self.created_to,
        }
    }
}
