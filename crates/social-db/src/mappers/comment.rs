//! Comment entity <-> model mapper

use std::collections::HashMap;

use social_core::entities::{Comment, ReactionLog};

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            post_id: model.post_id,
            parent_id: model.parent_id,
            level: model.level,
            user_id: model.user_id,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
            reaction_logs: Vec::new(),
        }
    }
}

/// Build comments from rows, handing each one the reactions that target it.
///
/// Row order is preserved.
pub fn attach_reactions(rows: Vec<CommentModel>, reactions: Vec<ReactionLog>) -> Vec<Comment> {
    let mut by_comment: HashMap<i64, Vec<ReactionLog>> = HashMap::new();
    for reaction in reactions {
        by_comment.entry(reaction.target_id).or_default().push(reaction);
    }

    rows.into_iter()
        .map(|row| {
            let mut comment = Comment::from(row);
            comment.reaction_logs = by_comment.remove(&comment.id).unwrap_or_default();
            comment
        })
        .collect()
}
