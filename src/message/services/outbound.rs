//! Outbound message service.
//!
//! Accepts content submitted by the platform, persists it, and hands it to
//! the transport for delivery by a broker.

use std::sync::Arc;

use mockable::Clock;
use serde_json::Value;

use crate::message::{
    domain::{
        Broker, ChatId, MessageDirection, MessageRecord, MessageRecordParams, OutboundMessage,
    },
    error::OutboundError,
    ports::{ContentValidator, MessagePublisher, MessageRepository},
};

/// A platform request to send a message.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    /// Chat the message belongs to.
    pub chat_id: ChatId,
    /// Destination address.
    pub recipient: String,
    /// Broker expected to deliver it.
    pub broker: Broker,
    /// Raw canonical content, tags included.
    pub content: Value,
}

impl OutboundRequest {
    /// Creates an outbound request.
    #[must_use]
    pub fn new(chat_id: ChatId, recipient: impl Into<String>, broker: Broker, content: Value) -> Self {
        Self {
            chat_id,
            recipient: recipient.into(),
            broker,
            content,
        }
    }
}

/// Service for submitting outbound messages.
#[derive(Clone)]
pub struct OutboundMessageService<V, R, P, K>
where
    V: ContentValidator,
    R: MessageRepository,
    P: MessagePublisher,
    K: Clock + Send + Sync,
{
    validator: Arc<V>,
    repository: Arc<R>,
    publisher: Arc<P>,
    clock: Arc<K>,
}

impl<V, R, P, K> OutboundMessageService<V, R, P, K>
where
    V: ContentValidator,
    R: MessageRepository,
    P: MessagePublisher,
    K: Clock + Send + Sync,
{
    /// Creates a new outbound message service.
    pub const fn new(
        validator: Arc<V>,
        repository: Arc<R>,
        publisher: Arc<P>,
        clock: Arc<K>,
    ) -> Self {
        Self {
            validator,
            repository,
            publisher,
            clock,
        }
    }

    /// Validates, stores, and publishes a message.
    ///
    /// Returns the stored record in the `queued` state.
    ///
    /// # Errors
    ///
    /// Returns `OutboundError` if:
    /// - The content violates its field rules (nothing is stored)
    /// - The repository fails
    /// - Publishing fails, after the record has been marked `failed`
    pub async fn submit(&self, request: OutboundRequest) -> Result<MessageRecord, OutboundError> {
        let content = self.validator.construct_value(&request.content)?;

        let params = MessageRecordParams::new(
            request.chat_id,
            request.recipient,
            MessageDirection::Outbound,
            content,
        );
        let mut record = MessageRecord::new(params, &*self.clock);
        self.repository.store(&record).await?;

        let message = OutboundMessage::from_record(&record, request.broker);
        if let Err(source) = self.publisher.publish_outbound(&message).await {
            tracing::warn!(
                message_id = %record.id(),
                routing_key = %message.routing_key(),
                error = %source,
                "outbound publish failed"
            );
            record.mark_failed(source.to_string(), &*self.clock);
            self.repository.update(&record).await?;
            return Err(OutboundError::Publish {
                message_id: record.id(),
                source,
            });
        }

        tracing::info!(
            message_id = %record.id(),
            routing_key = %message.routing_key(),
            "outbound message queued"
        );
        Ok(record)
    }
}
