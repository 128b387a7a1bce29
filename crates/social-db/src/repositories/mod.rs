//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in social-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod post;
mod post_like;
mod reaction;
mod report;
mod user;

pub use comment::PgCommentRepository;
pub use post::PgPostRepository;
pub use post_like::PgPostLikeRepository;
pub use reaction::PgReactionRepository;
pub use report::PgReportRepository;
pub use user::PgUserRepository;
