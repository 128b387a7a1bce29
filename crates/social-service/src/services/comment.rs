//! Comment service
//!
//! Threaded comments on posts. Every change is followed by a broadcast of
//! the post's rebuilt thread to connected clients.

use social_core::entities::{Comment, NewComment, ROOT_PARENT_ID};
use social_core::events::{DomainEvent, ReceiveCommentEvent};
use social_core::thread::{build_comment_tree, CommentNode};
use tracing::{debug, info, instrument, warn};

use crate::dto::CommentDto;

use super::context::ServiceContext;
use super::error::{PersistenceContext, ServiceError, ServiceResult};
use super::post::PostService;
use super::user::UserService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on a post, optionally in reply to another comment.
    ///
    /// Returns the post's thread as it stands after the insert.
    #[instrument(skip(self, content))]
    pub async fn create(
        &self,
        username: &str,
        post_id: i64,
        parent_comment_id: i64,
        content: String,
    ) -> ServiceResult<Vec<CommentNode>> {
        let user = UserService::new(self.ctx).require_user(username).await?;
        PostService::new(self.ctx).require_post(post_id).await?;

        let parent = self.resolve_parent(post_id, parent_comment_id).await?;
        let comment = NewComment::placed_under(post_id, user.id, content, parent.as_ref());

        let comment_id = self
            .ctx
            .comment_repo()
            .create(&comment)
            .await
            .or_persistence("Failed to create comment")?;

        info!(
            comment_id = comment_id,
            post_id = post_id,
            parent_id = comment.parent_id,
            level = comment.level,
            "Comment created"
        );

        self.refresh(post_id).await
    }

    /// Replace the content of a comment
    #[instrument(skip(self, content))]
    pub async fn update(
        &self,
        post_id: i64,
        comment_id: i64,
        content: String,
    ) -> ServiceResult<Vec<CommentNode>> {
        PostService::new(self.ctx).require_post(post_id).await?;

        let mut comment = self.require_comment(post_id, comment_id).await?;
        comment.edit(content);
        self.ctx
            .comment_repo()
            .update(&comment)
            .await
            .or_persistence("Failed to update comment")?;

        info!(comment_id = comment_id, post_id = post_id, "Comment updated");

        self.refresh(post_id).await
    }

    /// Delete a comment together with every reply beneath it
    #[instrument(skip(self))]
    pub async fn delete(&self, post_id: i64, comment_id: i64) -> ServiceResult<Vec<CommentNode>> {
        PostService::new(self.ctx).require_post(post_id).await?;
        self.require_comment(post_id, comment_id).await?;

        self.ctx
            .comment_repo()
            .delete(comment_id)
            .await
            .or_persistence("Failed to delete comment")?;

        info!(comment_id = comment_id, post_id = post_id, "Comment deleted");

        self.refresh(post_id).await
    }

    /// Threaded comments of a post
    #[instrument(skip(self))]
    pub async fn tree(&self, post_id: i64) -> ServiceResult<Vec<CommentNode>> {
        PostService::new(self.ctx).require_post(post_id).await?;
        self.load_tree(post_id).await
    }

    /// Comments of a post in creation order, without threading
    #[instrument(skip(self))]
    pub async fn list_flat(&self, post_id: i64) -> ServiceResult<Vec<CommentDto>> {
        PostService::new(self.ctx).require_post(post_id).await?;
        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        Ok(comments.iter().map(CommentDto::from).collect())
    }

    /// A comment of `post_id`; one that lives on another post is not found
    async fn require_comment(&self, post_id: i64, comment_id: i64) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.post_id == post_id)
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))
    }

    /// Parent a reply hangs under, or `None` for a top-level comment.
    ///
    /// A parent on another post counts as missing, so without strict lookup
    /// the reply is posted at top level rather than attached across posts.
    /// Whether a missing parent is an error depends on the comment policy.
    async fn resolve_parent(
        &self,
        post_id: i64,
        parent_comment_id: i64,
    ) -> ServiceResult<Option<Comment>> {
        if parent_comment_id == ROOT_PARENT_ID {
            return Ok(None);
        }

        let parent = self
            .ctx
            .comment_repo()
            .find_by_id(parent_comment_id)
            .await?
            .filter(|c| c.post_id == post_id);

        if parent.is_none() {
            if self.ctx.comment_policy().strict_parent_lookup {
                return Err(ServiceError::not_found(
                    "Comment",
                    parent_comment_id.to_string(),
                ));
            }
            debug!(
                parent_comment_id = parent_comment_id,
                "Parent comment not found, posting at top level"
            );
        }

        Ok(parent)
    }

    async fn load_tree(&self, post_id: i64) -> ServiceResult<Vec<CommentNode>> {
        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        Ok(build_comment_tree(post_id, &comments))
    }

    /// Rebuild the thread after a committed change and hand it to the publisher.
    ///
    /// A failed broadcast is logged and dropped. A failed reload is returned
    /// as is: the change stays saved but there is no thread to answer with.
    async fn refresh(&self, post_id: i64) -> ServiceResult<Vec<CommentNode>> {
        let tree = self.load_tree(post_id).await.inspect_err(|e| {
            warn!(post_id = post_id, error = %e, "Change saved but comment thread reload failed");
        })?;

        let event = DomainEvent::from(ReceiveCommentEvent::new(post_id, tree.clone()));
        match self.ctx.publisher().publish(&event).await {
            Ok(()) => debug!(post_id = post_id, "Comment thread broadcast"),
            Err(e) => warn!(post_id = post_id, error = %e, "Failed to broadcast comment thread"),
        }

        Ok(tree)
    }
}
