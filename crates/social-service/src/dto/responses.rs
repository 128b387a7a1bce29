//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use social_core::value_objects::ReactionType;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Compact profile shown next to posts and in member lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserShort {
    pub id: i64,
    /// The account's username
    pub full_name: String,
    pub known_as: String,
    pub image: String,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post as rendered in feeds
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Reactions left on the post
    pub like_number: i64,
    pub comment_number: i64,
    pub user_short: UserShort,
}

/// Like and comment counters of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostCounts {
    pub likes: i64,
    pub comments: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment row without threading, as returned by the flat listing
#[derive(Debug, Clone, Serialize)]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    pub parent_id: i64,
    pub level: i32,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Who reacted to a target, and how
#[derive(Debug, Clone, Serialize)]
pub struct ReactionDetail {
    #[serde(rename = "type")]
    pub reaction_type: ReactionType,
    pub display_name: String,
    pub user_full_name: String,
    pub user_id: i64,
}

/// Caller's reaction after a toggle; `None` once it has been taken back
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReactionStateResponse {
    pub reaction_type: Option<ReactionType>,
}

// ============================================================================
// Report Responses
// ============================================================================

/// Report as listed for moderators
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub user_id: i64,
    pub known_as: String,
    pub post_id: i64,
    /// Display name of the reason
    pub report: String,
    pub description: String,
    pub checked: bool,
    pub report_date: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}
