//! User service
//!
//! Read-only lookups of the accounts behind posts, comments and reactions.

use std::collections::HashMap;

use social_core::entities::User;
use tracing::instrument;

use crate::dto::UserShort;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the account a username belongs to
    #[instrument(skip(self))]
    pub async fn require_user(&self, username: &str) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username))
    }

    /// Resolve a username to its user id
    pub async fn resolve_username(&self, username: &str) -> ServiceResult<i64> {
        Ok(self.require_user(username).await?.id)
    }

    /// Compact profile of one user
    #[instrument(skip(self))]
    pub async fn get_user_short(&self, username: &str) -> ServiceResult<UserShort> {
        let user = self.require_user(username).await?;
        Ok(UserShort::from(&user))
    }

    /// Compact profiles of every user
    #[instrument(skip(self))]
    pub async fn list_user_short(&self) -> ServiceResult<Vec<UserShort>> {
        let users = self.ctx.user_repo().list().await?;
        Ok(users.iter().map(UserShort::from).collect())
    }

    /// Users by id, for joining onto posts, reactions and reports.
    ///
    /// Ids without an account are simply absent from the map.
    pub async fn users_by_id(&self, ids: &[i64]) -> ServiceResult<HashMap<i64, User>> {
        let mut ids = ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let users = self.ctx.user_repo().find_many(&ids).await?;
        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }
}
