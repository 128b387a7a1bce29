//! Reaction log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reaction_logs table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionLogModel {
    pub id: i64,
    pub user_id: i64,
    pub target_id: i64,
    pub target: i16,
    pub reaction_type: i16,
    pub created_at: DateTime<Utc>,
}
