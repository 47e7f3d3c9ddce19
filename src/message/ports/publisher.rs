//! Publisher port for the message transport.
//!
//! The transport owns exchanges, queues, dead-lettering, and delivery
//! guarantees; the core only hands it finished messages.

use crate::message::{
    domain::{OutboundMessage, SyncEvent},
    error::PublishError,
};
use async_trait::async_trait;

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Port for publishing messages to the transport.
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    /// Publishes a message for delivery by its broker.
    ///
    /// The transport routes it by [`OutboundMessage::routing_key`].
    ///
    /// # Errors
    ///
    /// Returns `PublishError` if the transport refuses the message.
    async fn publish_outbound(&self, message: &OutboundMessage) -> PublishResult<()>;

    /// Publishes a sync notification for platform consumers.
    ///
    /// # Errors
    ///
    /// Returns `PublishError` if the transport refuses the event.
    async fn publish_sync(&self, event: &SyncEvent) -> PublishResult<()>;
}
