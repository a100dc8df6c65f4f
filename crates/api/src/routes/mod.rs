//! HTTP route handlers.

use crate::error::ApiError;

pub mod admin;
pub mod announcements;
pub mod health;
pub mod inquiries;
pub mod posts;
pub mod praises;

/// Fallback for methods a resource does not support.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
