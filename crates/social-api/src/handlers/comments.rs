//! Comment handlers
//!
//! Every mutation answers with the post's thread as it stands afterwards.

use axum::extract::State;
use social_service::{
    CommentDto, CommentService, CommentView, CreateCommentRequest, UpdateCommentRequest,
};

use crate::extractors::{AuthUser, IdPath, PostCommentPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Threaded comments of a post
///
/// GET /posts/{post_id}/comments
pub async fn get_comment_tree(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(post_id): IdPath<i64>,
) -> ApiResult<ApiJson<Vec<CommentView>>> {
    let service = CommentService::new(state.service_context());
    let tree = service.tree(post_id).await?;
    Ok(ApiJson(tree))
}

/// Comments of a post without threading
///
/// GET /posts/{post_id}/comments/flat
pub async fn get_flat_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(post_id): IdPath<i64>,
) -> ApiResult<ApiJson<Vec<CommentDto>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list_flat(post_id).await?;
    Ok(ApiJson(comments))
}

/// Comment on a post or reply to a comment
///
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<i64>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<ApiJson<Vec<CommentView>>>> {
    let service = CommentService::new(state.service_context());
    let tree = service
        .create(
            &auth.username,
            post_id,
            request.parent_comment_id,
            request.content,
        )
        .await?;
    Ok(Created(ApiJson(tree)))
}

/// Edit a comment
///
/// PATCH /posts/{post_id}/comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(path): IdPath<PostCommentPath>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<ApiJson<Vec<CommentView>>> {
    let service = CommentService::new(state.service_context());
    let tree = service
        .update(path.post_id, path.comment_id, request.content)
        .await?;
    Ok(ApiJson(tree))
}

/// Delete a comment and its replies
///
/// DELETE /posts/{post_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(path): IdPath<PostCommentPath>,
) -> ApiResult<ApiJson<Vec<CommentView>>> {
    let service = CommentService::new(state.service_context());
    let tree = service.delete(path.post_id, path.comment_id).await?;
    Ok(ApiJson(tree))
}
