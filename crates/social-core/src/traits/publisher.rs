//! Real-time notification port

use async_trait::async_trait;

use crate::error::DomainError;
use crate::events::DomainEvent;

/// Hands domain events to the broadcast layer.
///
/// Implementations only enqueue; they never wait for clients to receive
/// the event, and a failure here must not undo the change that caused it.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &DomainEvent) -> Result<(), DomainError>;
}
