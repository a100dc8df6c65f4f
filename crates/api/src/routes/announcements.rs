//! Public announcement endpoint handlers.
//!
//! Announcements are read-only through the public API; writes go through the
//! admin console.

use axum::{extract::State, Json};
use persistence::repositories::AnnouncementRepository;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::announcement::{Announcement, AnnouncementResponse};

/// List announcements, newest first.
///
/// GET /api/v1/announcements
pub async fn list_announcements(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnnouncementResponse>>, ApiError> {
    let repo = AnnouncementRepository::new(state.pool.clone());
    let announcements = repo
        .list()
        .await?
        .into_iter()
        .map(|e| AnnouncementResponse::from(Announcement::from(e)))
        .collect();

    Ok(Json(announcements))
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::*;
    use axum::http::StatusCode;
    use domain::services::MockInquiryNotifier;

    #[tokio::test]
    async fn test_announcement_writes_are_not_allowed() {
        let cases = [
            ("POST", "/api/v1/announcements"),
            ("PUT", "/api/v1/announcements"),
            ("PUT", "/api/v1/announcements/1"),
            ("PATCH", "/api/v1/announcements/1"),
            ("DELETE", "/api/v1/announcements/1"),
        ];

        for (method, uri) in cases {
            let app = lazy_app(&[], MockInquiryNotifier::new());
            let response =
                send(app, json_request(method, uri, r#"{"content": "공지"}"#)).await;
            assert_eq!(
                response.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "{} {}",
                method,
                uri
            );
            assert_eq!(body_json(response).await["error"], "method_not_allowed");
        }
    }
}
