//! In-memory implementation of the `MessagePublisher` port.
//!
//! Records every publication instead of talking to a broker, so tests can
//! assert on exchange, routing key, and payload.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::GatewayConfig;
use crate::message::{
    domain::{OutboundMessage, SyncEvent},
    error::PublishError,
    ports::publisher::{MessagePublisher, PublishResult},
};

/// Routing key used for sync notifications.
pub const SYNC_ROUTING_KEY: &str = "sync";

/// A single recorded publication.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedMessage {
    /// Exchange the message was published to.
    pub exchange: String,
    /// Routing key it was published with.
    pub routing_key: String,
    /// Serialised payload.
    pub payload: Value,
}

/// In-memory implementation of [`MessagePublisher`].
///
/// Thread-safe via internal [`RwLock`]. Suitable for unit tests only.
#[derive(Debug, Clone)]
pub struct InMemoryMessagePublisher {
    exchange: String,
    published: Arc<RwLock<Vec<PublishedMessage>>>,
}

impl Default for InMemoryMessagePublisher {
    fn default() -> Self {
        Self::with_exchange("rcs.outbound")
    }
}

impl InMemoryMessagePublisher {
    /// Creates a publisher recording to the default exchange.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a publisher recording to the given exchange.
    #[must_use]
    pub fn with_exchange(exchange: impl Into<String>) -> Self {
        Self {
            exchange: exchange.into(),
            published: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a publisher recording to the configured outbound exchange.
    #[must_use]
    pub fn with_config(config: &GatewayConfig) -> Self {
        Self::with_exchange(config.outbound_exchange.clone())
    }

    /// Returns every publication so far, oldest first.
    ///
    /// Returns an empty list if the internal lock is poisoned.
    #[must_use]
    pub fn published(&self) -> Vec<PublishedMessage> {
        self.published
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Returns publications made with `routing_key`.
    #[must_use]
    pub fn published_to(&self, routing_key: &str) -> Vec<PublishedMessage> {
        self.published()
            .into_iter()
            .filter(|m| m.routing_key == routing_key)
            .collect()
    }

    fn record(&self, routing_key: String, message: &impl Serialize) -> PublishResult<()> {
        let payload =
            serde_json::to_value(message).map_err(|e| PublishError::Serialization(e.to_string()))?;
        let mut guard = self
            .published
            .write()
            .map_err(|e| PublishError::connection(format!("lock poisoned: {e}")))?;
        guard.push(PublishedMessage {
            exchange: self.exchange.clone(),
            routing_key,
            payload,
        });
        Ok(())
    }
}

#[async_trait]
impl MessagePublisher for InMemoryMessagePublisher {
    async fn publish_outbound(&self, message: &OutboundMessage) -> PublishResult<()> {
        self.record(message.routing_key(), message)
    }

    async fn publish_sync(&self, event: &SyncEvent) -> PublishResult<()> {
        self.record(SYNC_ROUTING_KEY.to_owned(), event)
    }
}
