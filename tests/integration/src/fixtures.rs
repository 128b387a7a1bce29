//! Test fixtures
//!
//! Request bodies the tests send and typed views of what the API returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use social_core::CommentNode;

/// Successful response body
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Failure response body
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

// ============================================================================
// Requests
// ============================================================================

/// Body of post create and edit
#[derive(Debug, Serialize)]
pub struct ContentBody {
    pub content: String,
}

impl ContentBody {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Body of comment create
#[derive(Debug, Serialize)]
pub struct CommentBody {
    pub content: String,
    pub parent_comment_id: i64,
}

impl CommentBody {
    pub fn root(content: impl Into<String>) -> Self {
        Self::reply(content, 0)
    }

    pub fn reply(content: impl Into<String>, parent_comment_id: i64) -> Self {
        Self {
            content: content.into(),
            parent_comment_id,
        }
    }
}

/// Body of a reaction toggle
#[derive(Debug, Serialize)]
pub struct ReactBody {
    pub reaction_type: &'static str,
}

impl ReactBody {
    pub fn new(reaction_type: &'static str) -> Self {
        Self { reaction_type }
    }
}

/// Body of a post report
#[derive(Debug, Serialize)]
pub struct ReportBody {
    pub reason: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ReportBody {
    pub fn new(reason: &'static str, description: Option<&str>) -> Self {
        Self {
            reason,
            description: description.map(str::to_string),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UserShortBody {
    pub id: i64,
    pub full_name: String,
    pub known_as: String,
    pub image: String,
}

#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub like_number: i64,
    pub comment_number: i64,
    pub user_short: UserShortBody,
}

#[derive(Debug, Deserialize)]
pub struct CountsBody {
    pub likes: i64,
    pub comments: i64,
}

#[derive(Debug, Deserialize)]
pub struct FlatCommentBody {
    pub id: i64,
    pub post_id: i64,
    pub parent_id: i64,
    pub level: i32,
    pub user_id: i64,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ReactionStateBody {
    pub reaction_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReactionDetailBody {
    #[serde(rename = "type")]
    pub reaction_type: String,
    pub display_name: String,
    pub user_full_name: String,
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ReportViewBody {
    pub user_id: i64,
    pub known_as: String,
    pub post_id: i64,
    pub report: String,
    pub description: String,
    pub checked: bool,
}

/// Ids of a thread in pre-order, paired with their depth
pub fn flatten(nodes: &[CommentNode]) -> Vec<(i64, usize)> {
    fn walk(nodes: &[CommentNode], depth: usize, out: &mut Vec<(i64, usize)>) {
        for node in nodes {
            out.push((node.id, depth));
            walk(&node.descendants, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(nodes, 1, &mut out);
    out
}
