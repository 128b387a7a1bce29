//! Post entity - a status update published by a user

use chrono::{DateTime, Utc};

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Check if the given user wrote this post
    #[inline]
    pub fn is_author(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    /// Replace the content and bump the update timestamp
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// Data needed to insert a post; the id is assigned by storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: i64,
    pub content: String,
}

/// Post together with its aggregate counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithStats {
    pub post: Post,
    /// Number of reaction rows targeting the post
    pub reaction_count: i64,
    /// Number of comments on the post, at any depth
    pub comment_count: i64,
}

/// A "like" on a post, keyed by (user, post)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLike {
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}
