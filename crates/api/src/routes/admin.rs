//! Admin console API routes.
//!
//! List, search and filter views over every entity, the post moderation
//! toggle and the inquiry spreadsheet export. These routes require admin API
//! key authentication.

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::api_key::ApiKeyAuth;
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::record_inquiry_export;
use domain::models::announcement::{
    AdminAnnouncementQuery, Announcement, AnnouncementResponse, CreateAnnouncementRequest,
};
use domain::models::inquiry::{AdminInquiryQuery, ExportInquiriesRequest, Inquiry, InquiryResponse};
use domain::models::post::{AdminPostQuery, Post, PostResponse, SetPostBlockedRequest};
use domain::models::praise::{AdminPraiseQuery, Praise, PraiseResponse};
use domain::models::{normalize_search, AdminListResponse};
use domain::services::{arrange_by_selection, export_inquiries_csv};
use persistence::repositories::{
    AnnouncementRepository, InquiryFilter, InquiryRepository, PostFilter, PostRepository,
    PraiseRepository,
};

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(q)| q)
        .map_err(|rejection| ApiError::Validation(rejection.body_text()))
}

/// GET /api/v1/admin/announcements
pub async fn list_announcements(
    State(state): State<AppState>,
    query: Result<Query<AdminAnnouncementQuery>, QueryRejection>,
) -> Result<Json<AdminListResponse<AnnouncementResponse>>, ApiError> {
    let query = query_params(query)?;
    let window = query.window();
    if window.is_empty() {
        return Ok(Json(AdminListResponse::new(Vec::new())));
    }

    let search = normalize_search(query.search.as_deref());
    let repo = AnnouncementRepository::new(state.pool.clone());
    let items = repo
        .search(search.as_deref(), window)
        .await?
        .into_iter()
        .map(|e| AnnouncementResponse::from(Announcement::from(e)))
        .collect();

    Ok(Json(AdminListResponse::new(items)))
}

/// POST /api/v1/admin/announcements
pub async fn create_announcement(
    State(state): State<AppState>,
    Extension(auth): Extension<ApiKeyAuth>,
    ValidatedJson(request): ValidatedJson<CreateAnnouncementRequest>,
) -> Result<(StatusCode, Json<AnnouncementResponse>), ApiError> {
    let repo = AnnouncementRepository::new(state.pool.clone());
    let announcement: Announcement = repo.create(&request.content).await?.into();

    info!(
        announcement_id = announcement.id,
        admin_key = %auth.key_prefix,
        "Announcement published"
    );

    Ok((StatusCode::CREATED, Json(announcement.into())))
}

/// DELETE /api/v1/admin/announcements/:id
pub async fn delete_announcement(
    State(state): State<AppState>,
    Extension(auth): Extension<ApiKeyAuth>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = AnnouncementRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::NotFound("Announcement not found".to_string()));
    }

    info!(announcement_id = id, admin_key = %auth.key_prefix, "Announcement deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/inquiries
///
/// `search` matches name, company, phone, email and message.
pub async fn list_inquiries(
    State(state): State<AppState>,
    query: Result<Query<AdminInquiryQuery>, QueryRejection>,
) -> Result<Json<AdminListResponse<InquiryResponse>>, ApiError> {
    let query = query_params(query)?;
    let filter = InquiryFilter {
        search: normalize_search(query.search.as_deref()),
        category: query.category,
        window: query.window(),
    };
    if filter.window.is_empty() {
        return Ok(Json(AdminListResponse::new(Vec::new())));
    }

    let repo = InquiryRepository::new(state.pool.clone());
    let items = repo
        .search(&filter)
        .await?
        .into_iter()
        .map(|e| InquiryResponse::from(Inquiry::from(e)))
        .collect();

    Ok(Json(AdminListResponse::new(items)))
}

/// POST /api/v1/admin/inquiries/export
///
/// Exports the selected inquiries as a CSV attachment, in selection order.
/// Unknown ids are skipped.
pub async fn export_inquiries(
    State(state): State<AppState>,
    Extension(auth): Extension<ApiKeyAuth>,
    ValidatedJson(request): ValidatedJson<ExportInquiriesRequest>,
) -> Result<Response, ApiError> {
    let offset = state
        .config
        .export
        .offset()
        .ok_or_else(|| ApiError::Internal("Invalid export UTC offset".to_string()))?;

    let repo = InquiryRepository::new(state.pool.clone());
    let loaded = repo
        .find_by_ids(&request.ids)
        .await?
        .into_iter()
        .map(Inquiry::from)
        .collect();

    let arranged = arrange_by_selection(&request.ids, loaded);
    if !arranged.missing.is_empty() {
        warn!(
            missing_ids = ?arranged.missing,
            "Skipping unknown inquiries in export"
        );
    }

    let body = export_inquiries_csv(&arranged.inquiries, offset)?;
    record_inquiry_export(arranged.inquiries.len());

    info!(
        rows = arranged.inquiries.len(),
        admin_key = %auth.key_prefix,
        "Inquiries exported"
    );

    let disposition = format!("attachment; filename=\"{}\"", state.config.export.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// GET /api/v1/admin/posts
///
/// Includes blocked posts.
pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<AdminPostQuery>, QueryRejection>,
) -> Result<Json<AdminListResponse<PostResponse>>, ApiError> {
    let query = query_params(query)?;
    let filter = PostFilter {
        search: normalize_search(query.search.as_deref()),
        is_blocked: query.is_blocked,
        window: query.window(),
    };
    if filter.window.is_empty() {
        return Ok(Json(AdminListResponse::new(Vec::new())));
    }

    let repo = PostRepository::new(state.pool.clone());
    let items = repo
        .search(&filter)
        .await?
        .into_iter()
        .map(|e| PostResponse::from(Post::from(e)))
        .collect();

    Ok(Json(AdminListResponse::new(items)))
}

/// PATCH /api/v1/admin/posts/:id/blocked
pub async fn set_post_blocked(
    State(state): State<AppState>,
    Extension(auth): Extension<ApiKeyAuth>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<SetPostBlockedRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let repo = PostRepository::new(state.pool.clone());
    let post: Post = repo
        .set_blocked(id, request.is_blocked)
        .await?
        .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?
        .into();

    info!(
        post_id = post.id,
        is_blocked = post.is_blocked,
        admin_key = %auth.key_prefix,
        "Post moderation flag updated"
    );

    Ok(Json(post.into()))
}

/// GET /api/v1/admin/praises
pub async fn list_praises(
    State(state): State<AppState>,
    query: Result<Query<AdminPraiseQuery>, QueryRejection>,
) -> Result<Json<AdminListResponse<PraiseResponse>>, ApiError> {
    let query = query_params(query)?;
    let search = normalize_search(query.search.as_deref());

    let repo = PraiseRepository::new(state.pool.clone());
    let items = repo
        .list(search.as_deref())
        .await?
        .into_iter()
        .map(|e| PraiseResponse::from(Praise::from(e)))
        .collect();

    Ok(Json(AdminListResponse::new(items)))
}

/// DELETE /api/v1/admin/praises/:id
pub async fn delete_praise(
    State(state): State<AppState>,
    Extension(auth): Extension<ApiKeyAuth>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = PraiseRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(ApiError::NotFound("Praise not found".to_string()));
    }

    info!(praise_id = id, admin_key = %auth.key_prefix, "Praise removed");

    Ok(StatusCode::NO_CONTENT)
}
