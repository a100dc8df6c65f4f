//! Public post endpoint handlers.
//!
//! Blocked posts are invisible here: they are not listed, cannot be fetched
//! and cannot be modified. The moderation flag is not part of any request.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::PostRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use domain::models::post::{CreatePostRequest, Post, PostResponse, UpdatePostRequest};

fn not_found() -> ApiError {
    ApiError::NotFound("Post not found".to_string())
}

/// List visible posts, newest first.
///
/// GET /api/v1/posts
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let repo = PostRepository::new(state.pool.clone());
    let posts = repo
        .list_visible()
        .await?
        .into_iter()
        .map(|e| PostResponse::from(Post::from(e)))
        .collect();

    Ok(Json(posts))
}

/// Get a single visible post.
///
/// GET /api/v1/posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostResponse>, ApiError> {
    let repo = PostRepository::new(state.pool.clone());
    let post = repo.find_visible_by_id(id).await?.ok_or_else(not_found)?;

    Ok(Json(Post::from(post).into()))
}

/// Create a post.
///
/// POST /api/v1/posts
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let repo = PostRepository::new(state.pool.clone());
    let post: Post = repo.create(&request).await?.into();

    info!(post_id = post.id, "Post created");

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// Replace every field of a post.
///
/// PUT /api/v1/posts/:id
pub async fn replace_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let repo = PostRepository::new(state.pool.clone());
    let post: Post = repo.replace(id, &request).await?.ok_or_else(not_found)?.into();

    info!(post_id = post.id, "Post replaced");

    Ok(Json(post.into()))
}

/// Partially update a post.
///
/// PATCH /api/v1/posts/:id
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let repo = PostRepository::new(state.pool.clone());

    // Nothing to change, but the post must still be visible
    if request.is_empty() {
        let post = repo.find_visible_by_id(id).await?.ok_or_else(not_found)?;
        return Ok(Json(Post::from(post).into()));
    }

    let post: Post = repo.update(id, &request).await?.ok_or_else(not_found)?.into();

    info!(post_id = post.id, "Post updated");

    Ok(Json(post.into()))
}

/// Delete a visible post.
///
/// DELETE /api/v1/posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = PostRepository::new(state.pool.clone());
    if repo.delete_visible(id).await? == 0 {
        return Err(not_found());
    }

    info!(post_id = id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::*;
    use axum::http::StatusCode;
    use domain::services::MockInquiryNotifier;

    #[tokio::test]
    async fn test_public_post_writes_cannot_set_is_blocked() {
        let body = r#"{"title": "구축 사례", "content": "내용", "is_blocked": true}"#;

        for (method, uri) in [("POST", "/api/v1/posts"), ("PUT", "/api/v1/posts/1")] {
            let app = lazy_app(&[], MockInquiryNotifier::new());
            let response = send(app, json_request(method, uri, body)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let json = body_json(response).await;
            assert!(json["message"].as_str().unwrap().contains("is_blocked"));
        }

        let app = lazy_app(&[], MockInquiryNotifier::new());
        let response = send(
            app,
            json_request("PATCH", "/api/v1/posts/1", r#"{"is_blocked": false}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_post_requires_title() {
        let app = lazy_app(&[], MockInquiryNotifier::new());
        let response = send(
            app,
            json_request("POST", "/api/v1/posts", r#"{"title": " ", "content": "내용"}"#),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["details"][0]["field"], "title");
    }
}
