//! # social-core
//!
//! Domain layer containing entities, value objects, the comment thread
//! builder, repository traits, and domain events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod thread;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    place_comment, Comment, NewComment, NewPost, NewReaction, Post, PostLike, PostReport, PostWithStats,
    ReactionChange, ReactionLog, User, MAX_COMMENT_LEVEL, ROOT_PARENT_ID,
};
pub use error::DomainError;
pub use events::{DomainEvent, ReceiveCommentEvent};
pub use thread::{build_comment_tree, reaction_stats, CommentNode};
pub use traits::{
    CommentRepository, EventPublisher, PostLikeRepository, PostRepository, ReactionRepository,
    RepoResult, ReportRepository, UserRepository,
};
pub use value_objects::{ReactTarget, ReactionType, ReportReason};
