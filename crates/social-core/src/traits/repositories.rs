//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method runs as its own unit of work:
//! once it returns `Ok` the change is committed.

use async_trait::async_trait;

use crate::entities::{
    Comment, NewComment, NewPost, NewReaction, Post, PostLike, PostReport, PostWithStats,
    ReactionLog, User,
};
use crate::error::DomainError;
use crate::value_objects::{ReactTarget, ReactionType};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by username (case-insensitive)
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find every user whose id is in `ids`; unknown ids are skipped
    async fn find_many(&self, ids: &[i64]) -> RepoResult<Vec<User>>;

    /// List all users
    async fn list(&self) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>>;

    /// Find post by ID with reaction and comment counts
    async fn find_with_stats(&self, id: i64) -> RepoResult<Option<PostWithStats>>;

    /// List all posts with counts, newest first
    async fn list_with_stats(&self) -> RepoResult<Vec<PostWithStats>>;

    /// List a user's posts with counts, newest first
    async fn list_with_stats_by_user(&self, user_id: i64) -> RepoResult<Vec<PostWithStats>>;

    /// Insert a post and return it with its assigned id
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    /// Update content and timestamp of an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post together with everything attached to it
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID (reaction logs are not loaded)
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>>;

    /// All comments of a post in creation order, with their reaction logs
    async fn find_by_post(&self, post_id: i64) -> RepoResult<Vec<Comment>>;

    /// Count comments of a post
    async fn count_by_post(&self, post_id: i64) -> RepoResult<i64>;

    /// Insert a comment and return its assigned id
    async fn create(&self, comment: &NewComment) -> RepoResult<i64>;

    /// Update content and timestamp of an existing comment
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment and its replies
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the reaction a user left on a target
    async fn find(
        &self,
        user_id: i64,
        target_id: i64,
        target: ReactTarget,
    ) -> RepoResult<Option<ReactionLog>>;

    /// All reactions on a target, oldest first
    async fn find_by_target(&self, target: ReactTarget, target_id: i64)
        -> RepoResult<Vec<ReactionLog>>;

    /// Insert a reaction
    async fn create(&self, reaction: &NewReaction) -> RepoResult<ReactionLog>;

    /// Change the type of an existing reaction
    async fn update_type(&self, id: i64, reaction_type: ReactionType) -> RepoResult<()>;

    /// Delete a reaction
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Post Like Repository
// ============================================================================

#[async_trait]
pub trait PostLikeRepository: Send + Sync {
    /// Find a user's like on a post
    async fn find(&self, user_id: i64, post_id: i64) -> RepoResult<Option<PostLike>>;

    /// Add a like
    async fn create(&self, user_id: i64, post_id: i64) -> RepoResult<()>;

    /// Remove a like
    async fn delete(&self, user_id: i64, post_id: i64) -> RepoResult<()>;

    /// Count likes on a post
    async fn count_by_post(&self, post_id: i64) -> RepoResult<i64>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Find the report a user filed against a post
    async fn find(&self, user_id: i64, post_id: i64) -> RepoResult<Option<PostReport>>;

    /// Insert a report
    async fn create(&self, report: &PostReport) -> RepoResult<()>;

    /// Overwrite reason and description of an existing report
    async fn update(&self, report: &PostReport) -> RepoResult<()>;

    /// List all reports, newest first
    async fn list(&self) -> RepoResult<Vec<PostReport>>;
}
