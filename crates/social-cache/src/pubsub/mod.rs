//! Redis Pub/Sub module.
//!
//! Fans domain events out to the processes holding client connections.

mod channels;
mod publisher;

pub use channels::{PubSubChannel, BROADCAST_CHANNEL, POST_CHANNEL_PREFIX};
pub use publisher::{PubSubEvent, Publisher};
