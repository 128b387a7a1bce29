use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::entities::{Comment, ReactionLog, MAX_COMMENT_LEVEL, ROOT_PARENT_ID};
use crate::value_objects::ReactionType;

/// Timestamp layout of [`CommentNode::created_at`] (`MM/DD/YYYY HH:MM:SS`, UTC)
pub const CREATED_AT_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// One comment of the rendered thread with its replies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentNode {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub user_id: i64,
    pub parent_comment_id: i64,
    pub created_at: String,
    /// Reaction counts on this comment only
    pub stats: BTreeMap<ReactionType, i64>,
    pub descendants: Vec<CommentNode>,
}

/// Count reactions by type
pub fn reaction_stats(logs: &[ReactionLog]) -> BTreeMap<ReactionType, i64> {
    let mut stats = BTreeMap::new();
    for log in logs {
        *stats.entry(log.reaction_type).or_insert(0) += 1;
    }
    stats
}

/// Build the reply tree of `post_id` from its comments.
///
/// Children are matched on the stored `parent_id` and `level`; timestamps
/// play no part. Siblings keep the order they have in `comments`, so
/// callers pass rows in creation order. Nothing below
/// [`MAX_COMMENT_LEVEL`] is rendered.
pub fn build_comment_tree(post_id: i64, comments: &[Comment]) -> Vec<CommentNode> {
    ThreadIndex::new(comments).children(post_id, ROOT_PARENT_ID, 1)
}

/// Positions of comments grouped by (parent id, level), in input order
struct ThreadIndex<'a> {
    comments: &'a [Comment],
    slots: HashMap<(i64, i32), Vec<usize>>,
}

impl<'a> ThreadIndex<'a> {
    fn new(comments: &'a [Comment]) -> Self {
        let mut slots: HashMap<(i64, i32), Vec<usize>> = HashMap::new();
        for (idx, comment) in comments.iter().enumerate() {
            slots
                .entry((comment.parent_id, comment.level))
                .or_default()
                .push(idx);
        }
        Self { comments, slots }
    }

    fn children(&self, post_id: i64, parent_id: i64, level: i32) -> Vec<CommentNode> {
        if level > MAX_COMMENT_LEVEL {
            return Vec::new();
        }

        let Some(indices) = self.slots.get(&(parent_id, level)) else {
            return Vec::new();
        };

        indices
            .iter()
            .map(|&idx| {
                let comment = &self.comments[idx];
                CommentNode {
                    id: comment.id,
                    content: comment.content.clone(),
                    post_id,
                    user_id: comment.user_id,
                    parent_comment_id: comment.parent_id,
                    created_at: comment.created_at.format(CREATED_AT_FORMAT).to_string(),
                    stats: reaction_stats(&comment.reaction_logs),
                    descendants: self.children(post_id, comment.id, level + 1),
                }
            })
            .collect()
    }
}
