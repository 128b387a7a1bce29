//! Post entity <-> model mappers

use social_core::entities::{Post, PostLike, PostWithStats};

use crate::models::{PostLikeModel, PostModel, PostWithStatsModel};

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            user_id: model.user_id,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<PostWithStatsModel> for PostWithStats {
    fn from(model: PostWithStatsModel) -> Self {
        PostWithStats {
            post: Post {
                id: model.id,
                user_id: model.user_id,
                content: model.content,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            reaction_count: model.reaction_count,
            comment_count: model.comment_count,
        }
    }
}

impl From<PostLikeModel> for PostLike {
    fn from(model: PostLikeModel) -> Self {
        PostLike {
            user_id: model.user_id,
            post_id: model.post_id,
            created_at: model.created_at,
        }
    }
}
