//! Pub/Sub channel definitions.

/// Channel prefix for events scoped to one post
pub const POST_CHANNEL_PREFIX: &str = "post:";
/// Channel for broadcast events (all connected clients)
pub const BROADCAST_CHANNEL: &str = "broadcast";

/// Pub/Sub channel types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PubSubChannel {
    /// Events for clients following one post
    Post(i64),
    /// Broadcast to all connected clients
    Broadcast,
}

impl PubSubChannel {
    #[must_use]
    pub fn post(post_id: i64) -> Self {
        Self::Post(post_id)
    }

    #[must_use]
    pub fn broadcast() -> Self {
        Self::Broadcast
    }

    /// Get the Redis channel name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Post(id) => format!("{POST_CHANNEL_PREFIX}{id}"),
            Self::Broadcast => BROADCAST_CHANNEL.to_string(),
        }
    }
}

impl std::fmt::Display for PubSubChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
