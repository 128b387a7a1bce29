//! User handlers
//!
//! Compact profiles of the people behind posts and comments.

use axum::extract::{Path, State};
use social_service::{UserService, UserShort};

use crate::extractors::AuthUser;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// List every user
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<ApiJson<Vec<UserShort>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_user_short().await?;
    Ok(ApiJson(users))
}

/// Get the caller's own profile
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<UserShort>> {
    let service = UserService::new(state.service_context());
    let user = service.get_user_short(&auth.username).await?;
    Ok(ApiJson(user))
}

/// Get a user by username
///
/// GET /users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<ApiJson<UserShort>> {
    let service = UserService::new(state.service_context());
    let user = service.get_user_short(&username).await?;
    Ok(ApiJson(user))
}
