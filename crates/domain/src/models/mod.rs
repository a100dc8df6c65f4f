//! Domain models for the corporate site.

pub mod announcement;
pub mod inquiry;
pub mod post;
pub mod praise;

pub use announcement::Announcement;
pub use inquiry::{Inquiry, InquiryCategory};
pub use post::Post;
pub use praise::Praise;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// List envelope used by the admin console.
#[derive(Debug, Clone, Serialize)]
pub struct AdminListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> AdminListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

/// Creation-date window shared by admin list filters.
///
/// Both bounds are inclusive; either may be omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreatedWindow {
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

impl CreatedWindow {
    /// Returns true when the window is inverted and can never match.
    pub fn is_empty(&self) -> bool {
        matches!((self.created_from, self.created_to), (Some(from), Some(to)) if from > to)
    }
}

/// Normalizes an optional admin search term: trims it and drops empty input.
pub fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
