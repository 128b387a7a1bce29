//! Threaded comment view
//!
//! Rebuilds the nested reply tree of a post from its flat comment rows.

mod tree;

pub use tree::{build_comment_tree, reaction_stats, CommentNode, CREATED_AT_FORMAT};
