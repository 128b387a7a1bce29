//! Domain entities - core business objects

mod comment;
mod post;
mod reaction;
mod report;
mod user;

pub use comment::{place_comment, Comment, NewComment, MAX_COMMENT_LEVEL, ROOT_PARENT_ID};
pub use post::{NewPost, Post, PostLike, PostWithStats};
pub use reaction::{NewReaction, ReactionChange, ReactionLog};
pub use report::PostReport;
pub use user::User;
