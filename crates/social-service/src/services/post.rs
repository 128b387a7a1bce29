//! Post service
//!
//! Publishing, editing and listing posts, plus the like toggle.

use social_core::entities::{NewPost, Post, PostWithStats};
use tracing::{info, instrument};

use crate::dto::{PostCounts, PostView, UserShort};

use super::context::ServiceContext;
use super::error::{PersistenceContext, ServiceError, ServiceResult};
use super::user::UserService;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a post as `username`
    #[instrument(skip(self, content))]
    pub async fn create(&self, username: &str, content: String) -> ServiceResult<PostView> {
        let user = UserService::new(self.ctx).require_user(username).await?;

        let post = self
            .ctx
            .post_repo()
            .create(&NewPost {
                user_id: user.id,
                content,
            })
            .await
            .or_persistence("Failed to create post")?;

        info!(post_id = post.id, user_id = user.id, "Post created");

        Ok(PostView::new(
            PostWithStats {
                post,
                reaction_count: 0,
                comment_count: 0,
            },
            UserShort::from(&user),
        ))
    }

    /// Replace the content of a post; only its author may do so
    #[instrument(skip(self, content))]
    pub async fn update(
        &self,
        username: &str,
        post_id: i64,
        content: String,
    ) -> ServiceResult<PostView> {
        let user = UserService::new(self.ctx).require_user(username).await?;
        let mut post = self.require_post(post_id).await?;

        if !post.is_author(user.id) {
            return Err(ServiceError::permission_denied(
                "only the author may edit a post",
            ));
        }

        post.edit(content);
        self.ctx
            .post_repo()
            .update(&post)
            .await
            .or_persistence("Failed to update post")?;

        info!(post_id = post_id, "Post updated");

        self.detail(post_id).await
    }

    /// Delete a post along with its comments, reactions, likes and reports
    #[instrument(skip(self))]
    pub async fn delete(&self, username: &str, post_id: i64) -> ServiceResult<()> {
        let user = UserService::new(self.ctx).require_user(username).await?;
        let post = self.require_post(post_id).await?;

        if !post.is_author(user.id) {
            return Err(ServiceError::permission_denied(
                "only the author may delete a post",
            ));
        }

        self.ctx
            .post_repo()
            .delete(post_id)
            .await
            .or_persistence("Failed to delete post")?;

        info!(post_id = post_id, "Post deleted");

        Ok(())
    }

    /// One post with its counters and author
    #[instrument(skip(self))]
    pub async fn detail(&self, post_id: i64) -> ServiceResult<PostView> {
        let stats = self
            .ctx
            .post_repo()
            .find_with_stats(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let mut views = self.views(vec![stats]).await?;
        views
            .pop()
            .ok_or_else(|| ServiceError::internal("post view vanished while rendering"))
    }

    /// Every post, newest first
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<PostView>> {
        let posts = self.ctx.post_repo().list_with_stats().await?;
        self.views(posts).await
    }

    /// Posts written by `username`, newest first
    #[instrument(skip(self))]
    pub async fn list_mine(&self, username: &str) -> ServiceResult<Vec<PostView>> {
        let user_id = UserService::new(self.ctx).resolve_username(username).await?;
        let posts = self.ctx.post_repo().list_with_stats_by_user(user_id).await?;
        self.views(posts).await
    }

    /// Like and comment counters of a post
    #[instrument(skip(self))]
    pub async fn counts(&self, post_id: i64) -> ServiceResult<PostCounts> {
        self.require_post(post_id).await?;

        let likes = self.ctx.post_like_repo().count_by_post(post_id).await?;
        let comments = self.ctx.comment_repo().count_by_post(post_id).await?;

        Ok(PostCounts { likes, comments })
    }

    /// Like the post, or take the like back, then return the refreshed feed
    #[instrument(skip(self))]
    pub async fn toggle_like(&self, username: &str, post_id: i64) -> ServiceResult<Vec<PostView>> {
        let user_id = UserService::new(self.ctx).resolve_username(username).await?;
        self.require_post(post_id).await?;

        let likes = self.ctx.post_like_repo();
        if likes.find(user_id, post_id).await?.is_some() {
            likes
                .delete(user_id, post_id)
                .await
                .or_persistence("Failed to like post")?;
            info!(post_id = post_id, user_id = user_id, "Post unliked");
        } else {
            likes
                .create(user_id, post_id)
                .await
                .or_persistence("Failed to like post")?;
            info!(post_id = post_id, user_id = user_id, "Post liked");
        }

        self.list_all().await
    }

    pub(crate) async fn require_post(&self, post_id: i64) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))
    }

    /// Attach author profiles, looked up in one batch
    async fn views(&self, posts: Vec<PostWithStats>) -> ServiceResult<Vec<PostView>> {
        let author_ids: Vec<i64> = posts.iter().map(|p| p.post.user_id).collect();
        let authors = UserService::new(self.ctx).users_by_id(&author_ids).await?;

        Ok(posts
            .into_iter()
            .map(|stats| {
                let author = authors
                    .get(&stats.post.user_id)
                    .map_or_else(|| UserShort::unknown(stats.post.user_id), UserShort::from);
                PostView::new(stats, author)
            })
            .collect())
    }
}
