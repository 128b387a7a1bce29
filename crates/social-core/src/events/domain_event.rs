//! Domain events - events emitted when domain state changes
//!
//! Events are handed to an [`EventPublisher`](crate::traits::EventPublisher)
//! and fanned out to connected clients by the real-time layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::thread::CommentNode;

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    /// A post's comment thread changed; carries the full rebuilt tree
    ReceiveComment(ReceiveCommentEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ReceiveComment(_) => "ReceiveComment",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::ReceiveComment(e) => e.timestamp,
        }
    }

    /// Post the event concerns
    pub fn post_id(&self) -> i64 {
        match self {
            Self::ReceiveComment(e) => e.post_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiveCommentEvent {
    pub post_id: i64,
    pub comments: Vec<CommentNode>,
    pub timestamp: DateTime<Utc>,
}

impl ReceiveCommentEvent {
    pub fn new(post_id: i64, comments: Vec<CommentNode>) -> Self {
        Self {
            post_id,
            comments,
            timestamp: Utc::now(),
        }
    }
}

impl From<ReceiveCommentEvent> for DomainEvent {
    fn from(event: ReceiveCommentEvent) -> Self {
        Self::ReceiveComment(event)
    }
}
