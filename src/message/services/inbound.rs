//! Inbound webhook service.
//!
//! The `InboundWebhookService` takes a single broker envelope from the
//! transport, decides what it means, and records the outcome.

use std::sync::Arc;

use mockable::Clock;

use crate::message::{
    domain::{
        BrokerEnvelope, ChatId, Disposition, MessageDirection, MessageId, MessageRecord,
        MessageRecordParams, MessageStatus, SyncEvent, SyncEventType,
    },
    error::{IngestError, RepositoryError},
    ports::{BrokerDialect, ContentValidator, MessagePublisher, MessageRepository},
};

/// Where an inbound message belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundContext {
    /// Chat the message is stored under.
    pub chat_id: ChatId,
    /// Address of the sender.
    pub recipient: String,
    /// Chat identifier in the consuming platform, echoed in sync events.
    pub reference_chat_id: String,
}

impl InboundContext {
    /// Creates an inbound context.
    #[must_use]
    pub fn new(
        chat_id: ChatId,
        recipient: impl Into<String>,
        reference_chat_id: impl Into<String>,
    ) -> Self {
        Self {
            chat_id,
            recipient: recipient.into(),
            reference_chat_id: reference_chat_id.into(),
        }
    }
}

/// Why the broker rejected a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The broker blocked a duplicate submission; carries its status text.
    Duplicate(String),
    /// The broker reported an error; carries its diagnostic verbatim.
    Error(String),
}

impl Rejection {
    /// Returns the reason text.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Duplicate(reason) | Self::Error(reason) => reason,
        }
    }
}

/// What ingesting an envelope did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundOutcome {
    /// A delivery or read acknowledgement; nothing was stored.
    Ignored,
    /// A new inbound message was stored and announced.
    Stored(MessageRecord),
    /// The broker message id was already stored; its `message` sync event
    /// was published again and nothing new was stored.
    AlreadyStored(MessageId),
    /// The content kind is known but not supported; dropped.
    Unsupported {
        /// The broker-reported content type.
        content_type: String,
    },
    /// The broker rejected a message.
    Rejected {
        /// The rejection reported by the broker.
        rejection: Rejection,
        /// The record that was marked failed, if one matched.
        updated: Option<MessageRecord>,
    },
}

/// Service for ingesting broker webhooks.
///
/// Runs the pipeline for one envelope:
/// 1. Classifies the envelope
/// 2. Normalises proceeding envelopes into canonical content
/// 3. Validates the content
/// 4. Stores an inbound record and publishes a sync event
///
/// Rejections mark the matching record (by broker message id) as failed.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use channels_gateway::message::adapters::memory::{
///     InMemoryMessagePublisher, InMemoryMessageRepository,
/// };
/// use channels_gateway::message::adapters::pontal_tech::PontalTechDialect;
/// use channels_gateway::message::domain::{BrokerEnvelope, ChatId};
/// use channels_gateway::message::services::{
///     InboundContext, InboundOutcome, InboundWebhookService,
/// };
/// use channels_gateway::message::validation::DefaultContentValidator;
/// use mockable::DefaultClock;
/// use serde_json::json;
///
/// # tokio_test_block_on(async {
/// let service = InboundWebhookService::new(
///     Arc::new(PontalTechDialect::new()),
///     Arc::new(DefaultContentValidator::new()),
///     Arc::new(InMemoryMessageRepository::new()),
///     Arc::new(InMemoryMessagePublisher::new()),
///     Arc::new(DefaultClock),
/// );
/// let context = InboundContext::new(ChatId::new(), "+5511999999999", "chat-1");
/// let envelope = BrokerEnvelope::new("text", "", json!({ "text": "hello" }));
///
/// let outcome = service.ingest(&envelope, &context).await.expect("ingested");
/// assert!(matches!(outcome, InboundOutcome::Stored(_)));
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(f)
/// # }
/// ```
#[derive(Clone)]
pub struct InboundWebhookService<D, V, R, P, K>
where
    D: BrokerDialect,
    V: ContentValidator,
    R: MessageRepository,
    P: MessagePublisher,
    K: Clock + Send + Sync,
{
    dialect: Arc<D>,
    validator: Arc<V>,
    repository: Arc<R>,
    publisher: Arc<P>,
    clock: Arc<K>,
}

impl<D, V, R, P, K> InboundWebhookService<D, V, R, P, K>
where
    D: BrokerDialect,
    V: ContentValidator,
    R: MessageRepository,
    P: MessagePublisher,
    K: Clock + Send + Sync,
{
    /// Creates a new inbound webhook service.
    pub const fn new(
        dialect: Arc<D>,
        validator: Arc<V>,
        repository: Arc<R>,
        publisher: Arc<P>,
        clock: Arc<K>,
    ) -> Self {
        Self {
            dialect,
            validator,
            repository,
            publisher,
            clock,
        }
    }

    /// Ingests a single broker envelope.
    ///
    /// # Errors
    ///
    /// Returns `IngestError` if:
    /// - The envelope is malformed for its declared type
    /// - The normalised content violates its field rules
    /// - The repository or publisher fails
    pub async fn ingest(
        &self,
        envelope: &BrokerEnvelope,
        context: &InboundContext,
    ) -> Result<InboundOutcome, IngestError> {
        let disposition = self.dialect.classify(envelope)?;
        tracing::debug!(
            broker = %self.dialect.broker(),
            event_type = %envelope.event_type,
            broker_message_id = ?envelope.broker_message_id,
            ?disposition,
            "classified broker envelope"
        );

        match disposition {
            Disposition::Ignore => Ok(InboundOutcome::Ignored),
            Disposition::DuplicateRejected(reason) => {
                self.reject(envelope, context, Rejection::Duplicate(reason))
                    .await
            }
            Disposition::ErrorRejected(message) => {
                self.reject(envelope, context, Rejection::Error(message))
                    .await
            }
            Disposition::Proceed => self.store(envelope, context).await,
        }
    }

    async fn store(
        &self,
        envelope: &BrokerEnvelope,
        context: &InboundContext,
    ) -> Result<InboundOutcome, IngestError> {
        let Some(content) = self.dialect.normalize(envelope)? else {
            tracing::info!(
                content_type = %envelope.event_type,
                "dropping unsupported broker content"
            );
            return Ok(InboundOutcome::Unsupported {
                content_type: envelope.event_type.clone(),
            });
        };

        self.validator.validate(&content)?;

        if let Some(broker_id) = envelope.broker_message_id.as_deref()
            && let Some(existing) = self.repository.find_by_broker_message_id(broker_id).await?
        {
            return self.already_stored(&existing, context).await;
        }

        let params = MessageRecordParams::new(
            context.chat_id,
            context.recipient.clone(),
            MessageDirection::Inbound,
            content,
        )
        .with_status(MessageStatus::Received)
        .with_broker_message_id(envelope.broker_message_id.clone());
        let record = MessageRecord::new(params, &*self.clock);

        match self.repository.store(&record).await {
            Ok(()) => {}
            Err(RepositoryError::DuplicateBrokerMessageId(broker_id)) => {
                // A concurrent delivery stored it between lookup and store.
                let existing = self
                    .repository
                    .find_by_broker_message_id(&broker_id)
                    .await?
                    .ok_or(RepositoryError::DuplicateBrokerMessageId(broker_id))?;
                return self.already_stored(&existing, context).await;
            }
            Err(err) => return Err(err.into()),
        }
        self.announce(&record, context).await?;

        tracing::info!(
            message_id = %record.id(),
            message_type = %record.content().message_type(),
            "stored inbound message"
        );
        Ok(InboundOutcome::Stored(record))
    }

    /// Re-announces a stored record so a delivery whose first sync publish
    /// failed still reaches the platform. Sync events are at-least-once.
    async fn already_stored(
        &self,
        existing: &MessageRecord,
        context: &InboundContext,
    ) -> Result<InboundOutcome, IngestError> {
        tracing::debug!(
            broker_message_id = ?existing.broker_message_id(),
            message_id = %existing.id(),
            "broker message already stored"
        );
        self.announce(existing, context).await?;
        Ok(InboundOutcome::AlreadyStored(existing.id()))
    }

    async fn announce(
        &self,
        record: &MessageRecord,
        context: &InboundContext,
    ) -> Result<(), IngestError> {
        let event = SyncEvent::from_record(
            record,
            SyncEventType::Message,
            context.reference_chat_id.clone(),
            &*self.clock,
        );
        self.publisher.publish_sync(&event).await?;
        Ok(())
    }

    async fn reject(
        &self,
        envelope: &BrokerEnvelope,
        context: &InboundContext,
        rejection: Rejection,
    ) -> Result<InboundOutcome, IngestError> {
        tracing::warn!(
            broker_message_id = ?envelope.broker_message_id,
            reason = rejection.reason(),
            "broker rejected message"
        );

        let Some(broker_id) = envelope.broker_message_id.as_deref() else {
            return Ok(InboundOutcome::Rejected {
                rejection,
                updated: None,
            });
        };

        let Some(mut record) = self.repository.find_by_broker_message_id(broker_id).await? else {
            return Ok(InboundOutcome::Rejected {
                rejection,
                updated: None,
            });
        };

        record.mark_failed(rejection.reason(), &*self.clock);
        self.repository.update(&record).await?;
        let event = SyncEvent::from_record(
            &record,
            SyncEventType::Status,
            context.reference_chat_id.clone(),
            &*self.clock,
        );
        self.publisher.publish_sync(&event).await?;

        Ok(InboundOutcome::Rejected {
            rejection,
            updated: Some(record),
        })
    }
}
