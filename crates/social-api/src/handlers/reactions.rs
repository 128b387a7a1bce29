//! Reaction handlers
//!
//! PUT toggles the caller's reaction: a new type is added, the same type
//! is taken back and a different type replaces the old one.

use axum::extract::State;
use social_core::ReactTarget;
use social_service::{ReactRequest, ReactionDetail, ReactionService, ReactionStateResponse};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// React to a post
///
/// PUT /posts/{post_id}/reactions
pub async fn react_to_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<ReactRequest>,
) -> ApiResult<ApiJson<ReactionStateResponse>> {
    let service = ReactionService::new(state.service_context());
    let reaction_type = service
        .react_post(&auth.username, post_id, request.reaction_type)
        .await?;
    Ok(ApiJson(ReactionStateResponse { reaction_type }))
}

/// Who reacted to a post
///
/// GET /posts/{post_id}/reactions
pub async fn get_post_reactions(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(post_id): IdPath<i64>,
) -> ApiResult<ApiJson<Vec<ReactionDetail>>> {
    let service = ReactionService::new(state.service_context());
    let details = service.reaction_details(ReactTarget::Post, post_id).await?;
    Ok(ApiJson(details))
}

/// React to a comment
///
/// PUT /comments/{comment_id}/reactions
pub async fn react_to_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<ReactRequest>,
) -> ApiResult<ApiJson<ReactionStateResponse>> {
    let service = ReactionService::new(state.service_context());
    let reaction_type = service
        .react_comment(&auth.username, comment_id, request.reaction_type)
        .await?;
    Ok(ApiJson(ReactionStateResponse { reaction_type }))
}

/// Who reacted to a comment
///
/// GET /comments/{comment_id}/reactions
pub async fn get_comment_reactions(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(comment_id): IdPath<i64>,
) -> ApiResult<ApiJson<Vec<ReactionDetail>>> {
    let service = ReactionService::new(state.service_context());
    let details = service
        .reaction_details(ReactTarget::Comment, comment_id)
        .await?;
    Ok(ApiJson(details))
}
