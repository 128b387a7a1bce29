//! Post handlers
//!
//! Endpoints for the feed, post CRUD and post likes.

use axum::extract::State;
use social_service::{PostContentRequest, PostCounts, PostService, PostView};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Every post, newest first
///
/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<ApiJson<Vec<PostView>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_all().await?;
    Ok(ApiJson(posts))
}

/// Posts written by the caller
///
/// GET /posts/@me
pub async fn list_my_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<PostView>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_mine(&auth.username).await?;
    Ok(ApiJson(posts))
}

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<PostContentRequest>,
) -> ApiResult<Created<ApiJson<PostView>>> {
    let service = PostService::new(state.service_context());
    let post = service.create(&auth.username, request.content).await?;
    Ok(Created(ApiJson(post)))
}

/// Get a single post
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(post_id): IdPath<i64>,
) -> ApiResult<ApiJson<PostView>> {
    let service = PostService::new(state.service_context());
    let post = service.detail(post_id).await?;
    Ok(ApiJson(post))
}

/// Edit a post; only its author may
///
/// PATCH /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<PostContentRequest>,
) -> ApiResult<ApiJson<PostView>> {
    let service = PostService::new(state.service_context());
    let post = service
        .update(&auth.username, post_id, request.content)
        .await?;
    Ok(ApiJson(post))
}

/// Delete a post; only its author may
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<i64>,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.delete(&auth.username, post_id).await?;
    Ok(NoContent)
}

/// Like and comment counters of a post
///
/// GET /posts/{post_id}/counts
pub async fn get_post_counts(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(post_id): IdPath<i64>,
) -> ApiResult<ApiJson<PostCounts>> {
    let service = PostService::new(state.service_context());
    let counts = service.counts(post_id).await?;
    Ok(ApiJson(counts))
}

/// Like a post, or take the like back
///
/// PUT /posts/{post_id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<i64>,
) -> ApiResult<ApiJson<Vec<PostView>>> {
    let service = PostService::new(state.service_context());
    let posts = service.toggle_like(&auth.username, post_id).await?;
    Ok(ApiJson(posts))
}
