//! Praise endpoint handlers.
//!
//! Praises can be listed, retrieved and created. Update and delete are
//! rejected with 405 by the router fallback, whoever asks.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::PraiseRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use domain::models::praise::{CreatePraiseRequest, Praise, PraiseResponse};

/// List praises, newest first.
///
/// GET /api/v1/praises
pub async fn list_praises(
    State(state): State<AppState>,
) -> Result<Json<Vec<PraiseResponse>>, ApiError> {
    let repo = PraiseRepository::new(state.pool.clone());
    let praises = repo
        .list(None)
        .await?
        .into_iter()
        .map(|e| PraiseResponse::from(Praise::from(e)))
        .collect();

    Ok(Json(praises))
}

/// Get a single praise.
///
/// GET /api/v1/praises/:id
pub async fn get_praise(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PraiseResponse>, ApiError> {
    let repo = PraiseRepository::new(state.pool.clone());
    let praise = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Praise not found".to_string()))?;

    Ok(Json(Praise::from(praise).into()))
}

/// Create a praise.
///
/// POST /api/v1/praises
pub async fn create_praise(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePraiseRequest>,
) -> Result<(StatusCode, Json<PraiseResponse>), ApiError> {
    let repo = PraiseRepository::new(state.pool.clone());
    let praise: Praise = repo.create(&request.message).await?.into();

    info!(praise_id = praise.id, "Praise created");

    Ok((StatusCode::CREATED, Json(praise.into())))
}
