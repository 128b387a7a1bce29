//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use social_core::entities::{Comment, PostReport, PostWithStats, ReactionLog, User};

use super::responses::{CommentDto, PostView, ReactionDetail, ReportView, UserShort};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserShort {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.username.clone(),
            known_as: user.known_as_or_default().to_string(),
            image: user.photo_or_default().to_string(),
        }
    }
}

impl UserShort {
    /// Placeholder for an author whose account is gone
    pub fn unknown(id: i64) -> Self {
        Self {
            id,
            full_name: String::new(),
            known_as: String::new(),
            image: String::new(),
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl PostView {
    pub fn new(stats: PostWithStats, user_short: UserShort) -> Self {
        let PostWithStats {
            post,
            reaction_count,
            comment_count,
        } = stats;
        Self {
            id: post.id,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
            like_number: reaction_count,
            comment_number: comment_count,
            user_short,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            parent_id: comment.parent_id,
            level: comment.level,
            user_id: comment.user_id,
            content: comment.content.clone(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl ReactionDetail {
    pub fn new(log: &ReactionLog, user: &User) -> Self {
        Self {
            reaction_type: log.reaction_type,
            display_name: log.reaction_type.display_name().to_string(),
            user_full_name: user.known_as_or_default().to_string(),
            user_id: user.id,
        }
    }
}

// ============================================================================
// Report Mappers
// ============================================================================

impl ReportView {
    pub fn new(report: PostReport, known_as: String) -> Self {
        Self {
            user_id: report.user_id,
            known_as,
            post_id: report.post_id,
            report: report.reason.display_name().to_string(),
            description: report.description,
            checked: report.checked,
            report_date: report.report_date,
        }
    }
}
