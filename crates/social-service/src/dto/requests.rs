//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use social_core::value_objects::{ReactionType, ReportReason};

// ============================================================================
// Post Requests
// ============================================================================

/// Create or edit a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostContentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,

    /// Comment being answered; 0 or absent for a top-level comment
    #[serde(default)]
    pub parent_comment_id: i64,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// React to a post or comment; repeating the same type takes it back
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactRequest {
    pub reaction_type: ReactionType,
}

// ============================================================================
// Report Requests
// ============================================================================

/// Report a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReportPostRequest {
    pub reason: ReportReason,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
}
