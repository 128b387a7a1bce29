//! Comment entity - a node of a post's threaded discussion
//!
//! Threads are stored flat: every row carries its parent id and its depth.
//! Depth is fixed when the comment is written and capped at
//! [`MAX_COMMENT_LEVEL`].

use chrono::{DateTime, Utc};

use super::reaction::ReactionLog;

/// Parent id of top-level comments
pub const ROOT_PARENT_ID: i64 = 0;

/// Deepest level a comment can live at (roots are level 1)
pub const MAX_COMMENT_LEVEL: i32 = 3;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    /// [`ROOT_PARENT_ID`] for top-level comments
    pub parent_id: i64,
    /// 1 (root) to [`MAX_COMMENT_LEVEL`]
    pub level: i32,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Reactions on this comment; empty unless loaded with the thread
    pub reaction_logs: Vec<ReactionLog>,
}

impl Comment {
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent_id == ROOT_PARENT_ID
    }

    /// Replace the content and bump the update timestamp
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// Comment about to be inserted, with its thread position already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i64,
    pub parent_id: i64,
    pub level: i32,
    pub user_id: i64,
    pub content: String,
}

impl NewComment {
    /// Top-level comment on a post
    pub fn root(post_id: i64, user_id: i64, content: String) -> Self {
        Self {
            post_id,
            parent_id: ROOT_PARENT_ID,
            level: 1,
            user_id,
            content,
        }
    }

    /// Comment placed under `parent`, or at the root when there is none.
    ///
    /// See [`place_comment`] for how the position is chosen.
    pub fn placed_under(
        post_id: i64,
        user_id: i64,
        content: String,
        parent: Option<&Comment>,
    ) -> Self {
        let (parent_id, level) = place_comment(parent);
        Self {
            post_id,
            parent_id,
            level,
            user_id,
            content,
        }
    }
}

/// Resolve the `(parent_id, level)` a reply to `parent` is stored with.
///
/// A reply one level below the parent would overflow the maximum depth
/// when the parent is already at [`MAX_COMMENT_LEVEL`]. In that case the
/// reply is attached to the parent's own parent and stays at the
/// maximum level, becoming a sibling of the comment it answered.
pub fn place_comment(parent: Option<&Comment>) -> (i64, i32) {
    let Some(parent) = parent else {
        return (ROOT_PARENT_ID, 1);
    };

    let level = parent.level + 1;
    if level > MAX_COMMENT_LEVEL {
        (parent.parent_id, MAX_COMMENT_LEVEL)
    } else {
        (parent.id, level)
    }
}
