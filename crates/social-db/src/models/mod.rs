//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod post;
mod reaction;
mod report;
mod user;

pub use comment::CommentModel;
pub use post::{PostLikeModel, PostModel, PostWithStatsModel};
pub use reaction::ReactionLogModel;
pub use report::PostReportModel;
pub use user::UserModel;
