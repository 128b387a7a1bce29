//! Reaction service
//!
//! One reaction per user and target. Reacting again with the same type
//! takes the reaction back; a different type replaces it.

use social_core::entities::{NewReaction, ReactionChange};
use social_core::error::DomainError;
use social_core::value_objects::{ReactTarget, ReactionType};
use tracing::{info, instrument};

use crate::dto::ReactionDetail;

use super::context::ServiceContext;
use super::error::{PersistenceContext, ServiceError, ServiceResult};
use super::post::PostService;
use super::user::UserService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a reaction on a post; returns the caller's reaction afterwards
    #[instrument(skip(self))]
    pub async fn react_post(
        &self,
        username: &str,
        post_id: i64,
        reaction_type: ReactionType,
    ) -> ServiceResult<Option<ReactionType>> {
        let user_id = UserService::new(self.ctx).resolve_username(username).await?;
        PostService::new(self.ctx).require_post(post_id).await?;

        self.toggle(user_id, ReactTarget::Post, post_id, reaction_type)
            .await
            .or_persistence("Failed to react to post")
    }

    /// Toggle a reaction on a comment; returns the caller's reaction afterwards
    #[instrument(skip(self))]
    pub async fn react_comment(
        &self,
        username: &str,
        comment_id: i64,
        reaction_type: ReactionType,
    ) -> ServiceResult<Option<ReactionType>> {
        let user_id = UserService::new(self.ctx).resolve_username(username).await?;
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        self.toggle(user_id, ReactTarget::Comment, comment_id, reaction_type)
            .await
            .or_persistence("Failed to react to comment")
    }

    /// Who reacted to a target and with what.
    ///
    /// Reactions from accounts that no longer resolve are left out.
    #[instrument(skip(self))]
    pub async fn reaction_details(
        &self,
        target: ReactTarget,
        target_id: i64,
    ) -> ServiceResult<Vec<ReactionDetail>> {
        match target {
            ReactTarget::Post => {
                PostService::new(self.ctx).require_post(target_id).await?;
            }
            ReactTarget::Comment => {
                self.ctx
                    .comment_repo()
                    .find_by_id(target_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Comment", target_id.to_string()))?;
            }
        }

        let reactions = self
            .ctx
            .reaction_repo()
            .find_by_target(target, target_id)
            .await?;
        let user_ids: Vec<i64> = reactions.iter().map(|r| r.user_id).collect();
        let users = UserService::new(self.ctx).users_by_id(&user_ids).await?;

        Ok(reactions
            .iter()
            .filter_map(|log| users.get(&log.user_id).map(|user| ReactionDetail::new(log, user)))
            .collect())
    }

    /// Apply the toggle for one (user, target) pair
    async fn toggle(
        &self,
        user_id: i64,
        target: ReactTarget,
        target_id: i64,
        requested: ReactionType,
    ) -> Result<Option<ReactionType>, DomainError> {
        let repo = self.ctx.reaction_repo();
        let existing = repo.find(user_id, target_id, target).await?;
        let change = ReactionChange::decide(existing.as_ref().map(|r| r.reaction_type), requested);

        match (change, existing) {
            (ReactionChange::Insert(reaction_type), _) => {
                repo.create(&NewReaction {
                    user_id,
                    target_id,
                    target,
                    reaction_type,
                })
                .await?;
            }
            (ReactionChange::Remove, Some(log)) => repo.delete(log.id).await?,
            (ReactionChange::Switch { to, .. }, Some(log)) => repo.update_type(log.id, to).await?,
            // decide() only removes or switches an existing reaction
            (ReactionChange::Remove | ReactionChange::Switch { .. }, None) => {}
        }

        info!(
            user_id = user_id,
            target = target.resource(),
            target_id = target_id,
            change = ?change,
            "Reaction applied"
        );

        Ok(change.resulting_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CommentPolicy, CommentService};
    use crate::testing::in_memory_context;

    #[tokio::test]
    async fn test_post_reaction_flip_flop() {
        let (ctx, store, _) = in_memory_context(CommentPolicy::default());
        store.add_user("thu", None);
        let post = PostService::new(&ctx)
            .create("thu", "react".to_string())
            .await
            .unwrap();
        let service = ReactionService::new(&ctx);

        let state = service.react_post("thu", post.id, ReactionType::Like).await.unwrap();
        assert_eq!(state, Some(ReactionType::Like));

        let state = service.react_post("thu", post.id, ReactionType::Love).await.unwrap();
        assert_eq!(state, Some(ReactionType::Love));
        assert_eq!(store.reactions().len(), 1);

        let state = service.react_post("thu", post.id, ReactionType::Love).await.unwrap();
        assert_eq!(state, None);
        assert!(store.reactions().is_empty());

        let state = service.react_post("thu", post.id, ReactionType::Like).await.unwrap();
        assert_eq!(state, Some(ReactionType::Like));
    }

    #[tokio::test]
    async fn test_post_reactions_count_as_likes() {
        let (ctx, store, _) = in_memory_context(CommentPolicy::default());
        store.add_user("thu", None);
        store.add_user("kim", None);
        let posts = PostService::new(&ctx);
        let post = posts.create("thu", "react".to_string()).await.unwrap();
        let service = ReactionService::new(&ctx);

        service.react_post("thu", post.id, ReactionType::Haha).await.unwrap();
        service.react_post("kim", post.id, ReactionType::Wow).await.unwrap();

        assert_eq!(posts.detail(post.id).await.unwrap().like_number, 2);
    }

    #[tokio::test]
    async fn test_comment_reactions_feed_tree_stats() {
        let (ctx, store, _) = in_memory_context(CommentPolicy::default());
        store.add_user("thu", Some("Thu"));
        store.add_user("kim", None);
        let post = PostService::new(&ctx)
            .create("thu", "post".to_string())
            .await
            .unwrap();
        let comments = CommentService::new(&ctx);
        let tree = comments.create("thu", post.id, 0, "c".to_string()).await.unwrap();
        let comment_id = tree[0].id;

        let service = ReactionService::new(&ctx);
        service.react_comment("thu", comment_id, ReactionType::Sad).await.unwrap();
        service.react_comment("kim", comment_id, ReactionType::Sad).await.unwrap();

        let tree = comments.tree(post.id).await.unwrap();
        assert_eq!(tree[0].stats.get(&ReactionType::Sad), Some(&2));

        let details = service
            .reaction_details(ReactTarget::Comment, comment_id)
            .await
            .unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].user_full_name, "Thu");
        assert_eq!(details[0].display_name, "Sad");
    }

    #[tokio::test]
    async fn test_missing_targets_are_not_found() {
        let (ctx, store, _) = in_memory_context(CommentPolicy::default());
        store.add_user("thu", None);
        let service = ReactionService::new(&ctx);

        assert!(service
            .react_post("thu", 55, ReactionType::Like)
            .await
            .unwrap_err()
            .is_not_found());
        assert!(service
            .react_comment("thu", 55, ReactionType::Like)
            .await
            .unwrap_err()
            .is_not_found());
        assert!(store.reactions().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_message() {
        let (ctx, store, _) = in_memory_context(CommentPolicy::default());
        store.add_user("thu", None);
        let post = PostService::new(&ctx)
            .create("thu", "post".to_string())
            .await
            .unwrap();
        store.fail_writes(true);

        let err = ReactionService::new(&ctx)
            .react_post("thu", post.id, ReactionType::Like)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to react to post");
    }
}
