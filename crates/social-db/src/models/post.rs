//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post row joined with its counters (from query)
#[derive(Debug, Clone, FromRow)]
pub struct PostWithStatsModel {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reaction_count: i64,
    pub comment_count: i64,
}

/// Database model for post_likes table
#[derive(Debug, Clone, FromRow)]
pub struct PostLikeModel {
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}
