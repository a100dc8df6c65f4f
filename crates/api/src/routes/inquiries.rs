//! Inquiry endpoint handlers.
//!
//! Creation is always public. The remaining endpoints follow
//! `security.inquiry_access`, enforced by middleware.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::InquiryRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::record_inquiry_received;
use crate::services::notify_inquiry_created_quietly;
use domain::models::inquiry::{
    CreateInquiryRequest, Inquiry, InquiryResponse, UpdateInquiryRequest,
};

fn not_found() -> ApiError {
    ApiError::NotFound("Inquiry not found".to_string())
}

/// Create an inquiry and notify the administrator.
///
/// POST /api/v1/inquiries
///
/// The notification is attempted once after the insert, bounded by
/// `notification.timeout_secs`; its failure never changes the response.
pub async fn create_inquiry(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateInquiryRequest>,
) -> Result<(StatusCode, Json<InquiryResponse>), ApiError> {
    let repo = InquiryRepository::new(state.pool.clone());
    let inquiry: Inquiry = repo.create(&request).await?.into();

    record_inquiry_received();
    info!(
        inquiry_id = inquiry.id,
        category = %inquiry.category,
        "Inquiry created"
    );

    notify_inquiry_created_quietly(
        state.notifier.as_ref(),
        &inquiry,
        state.config.notification.timeout(),
    )
    .await;

    Ok((StatusCode::CREATED, Json(inquiry.into())))
}

/// List inquiries, newest first.
///
/// GET /api/v1/inquiries
pub async fn list_inquiries(
    State(state): State<AppState>,
) -> Result<Json<Vec<InquiryResponse>>, ApiError> {
    let repo = InquiryRepository::new(state.pool.clone());
    let inquiries = repo
        .list()
        .await?
        .into_iter()
        .map(|e| InquiryResponse::from(Inquiry::from(e)))
        .collect();

    Ok(Json(inquiries))
}

/// Get a single inquiry.
///
/// GET /api/v1/inquiries/:id
pub async fn get_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<InquiryResponse>, ApiError> {
    let repo = InquiryRepository::new(state.pool.clone());
    let inquiry = repo.find_by_id(id).await?.ok_or_else(not_found)?;

    Ok(Json(Inquiry::from(inquiry).into()))
}

/// Replace an inquiry.
///
/// PUT /api/v1/inquiries/:id
pub async fn replace_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateInquiryRequest>,
) -> Result<Json<InquiryResponse>, ApiError> {
    let update = UpdateInquiryRequest::from(request);
    store_update(&state, id, &update).await
}

/// Partially update an inquiry.
///
/// PATCH /api/v1/inquiries/:id
pub async fn update_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateInquiryRequest>,
) -> Result<Json<InquiryResponse>, ApiError> {
    store_update(&state, id, &request).await
}

async fn store_update(
    state: &AppState,
    id: i64,
    update: &UpdateInquiryRequest,
) -> Result<Json<InquiryResponse>, ApiError> {
    let repo = InquiryRepository::new(state.pool.clone());
    let inquiry: Inquiry = repo.update(id, update).await?.ok_or_else(not_found)?.into();

    info!(inquiry_id = inquiry.id, "Inquiry updated");

    Ok(Json(inquiry.into()))
}

/// Delete an inquiry.
///
/// DELETE /api/v1/inquiries/:id
pub async fn delete_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = InquiryRepository::new(state.pool.clone());
    if repo.delete(id).await? == 0 {
        return Err(not_found());
    }

    info!(inquiry_id = id, "Inquiry deleted");

    Ok(StatusCode::NO_CONTENT)
}
