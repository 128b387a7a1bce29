//! # social-cache
//!
//! Redis layer for real-time event distribution.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Pub/Sub**: Comment-thread updates fanned out across server instances
//!
//! ## Example
//!
//! ```ignore
//! use social_cache::{Publisher, RedisPool, RedisPoolConfig};
//! use social_core::traits::EventPublisher;
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let publisher = Publisher::new(pool);
//!
//! // Hand the publisher to the service layer as its EventPublisher
//! let publisher: std::sync::Arc<dyn EventPublisher> = std::sync::Arc::new(publisher);
//! ```

pub mod pool;
pub mod pubsub;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export pubsub types
pub use pubsub::{PubSubChannel, PubSubEvent, Publisher, BROADCAST_CHANNEL, POST_CHANNEL_PREFIX};
