//! Authentication middleware.
//!
//! Guards the admin console and, depending on configuration, the
//! non-create inquiry endpoints.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::config::InquiryAccess;
use crate::error::ApiError;
use crate::extractors::api_key::{ApiKeyAuth, API_KEY_HEADER};

/// Middleware for admin-only routes.
///
/// Requires a valid `X-API-Key` with admin privileges. The authenticated key
/// is stored in request extensions.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    match authorize_admin(&state, req).await {
        Ok(req) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}

/// Middleware for inquiry list/retrieve/update/delete.
///
/// Open by default; requires an admin key under `inquiry_access = "create_only"`.
pub async fn inquiry_access(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if state.config.security.inquiry_access == InquiryAccess::Public {
        return next.run(req).await;
    }

    match authorize_admin(&state, req).await {
        Ok(req) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}

async fn authorize_admin(
    state: &AppState,
    mut req: Request<Body>,
) -> Result<Request<Body>, ApiError> {
    let api_key = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| ApiError::Unauthorized("Invalid or missing API key".to_string()))?;

    let auth = ApiKeyAuth::validate(&state.pool, &api_key).await?;
    if !auth.is_admin {
        return Err(ApiError::Forbidden("Admin access required".to_string()));
    }

    req.extensions_mut().insert(auth);
    Ok(req)
}
