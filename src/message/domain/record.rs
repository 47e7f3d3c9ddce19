//! The durable representation a message becomes once normalised or submitted.
//!
//! A record references its chat but does not own it. Only delivery-status
//! handling mutates `status` and `error_message`; normalisation never does.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{ChannelContent, ChatId, MessageId};

/// Whether a message entered or left the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageDirection {
    /// Received from a broker.
    Inbound,
    /// Submitted by the platform for delivery.
    Outbound,
}

impl MessageDirection {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }
}

impl fmt::Display for MessageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MessageDirection {
    type Error = ParseMessageDirectionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inbound" => Ok(Self::Inbound),
            "outbound" => Ok(Self::Outbound),
            _ => Err(ParseMessageDirectionError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a message direction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message direction: {0}")]
pub struct ParseMessageDirectionError(pub String);

/// Delivery lifecycle state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    /// Accepted by the platform, not yet handed to the broker.
    #[default]
    Queued,
    /// Handed to the broker.
    Sent,
    /// The broker confirmed delivery to the handset.
    Delivered,
    /// The recipient read the message.
    Read,
    /// Inbound message received from the broker.
    Received,
    /// Delivery failed; see the record's error message.
    Failed,
}

impl MessageStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
            Self::Read => "read",
            Self::Received => "received",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MessageStatus {
    type Error = ParseMessageStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "queued" => Ok(Self::Queued),
            "sent" => Ok(Self::Sent),
            "delivered" => Ok(Self::Delivered),
            "read" => Ok(Self::Read),
            "received" => Ok(Self::Received),
            "failed" => Ok(Self::Failed),
            _ => Err(ParseMessageStatusError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a message status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message status: {0}")]
pub struct ParseMessageStatusError(pub String);

/// Parameters for creating a [`MessageRecord`].
#[derive(Debug, Clone)]
pub struct MessageRecordParams {
    /// The owning chat.
    pub chat_id: ChatId,
    /// Address of the other party.
    pub recipient: String,
    /// Inbound or outbound.
    pub direction: MessageDirection,
    /// Initial lifecycle state.
    pub status: MessageStatus,
    /// Provider-side identifier, when known.
    pub broker_message_id: Option<String>,
    /// Canonical content, stored opaquely.
    pub content: ChannelContent,
}

impl MessageRecordParams {
    /// Creates parameters with the default `queued` status.
    #[must_use]
    pub fn new(
        chat_id: ChatId,
        recipient: impl Into<String>,
        direction: MessageDirection,
        content: ChannelContent,
    ) -> Self {
        Self {
            chat_id,
            recipient: recipient.into(),
            direction,
            status: MessageStatus::default(),
            broker_message_id: None,
            content,
        }
    }

    /// Overrides the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: MessageStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the broker message identifier.
    #[must_use]
    pub fn with_broker_message_id(mut self, broker_message_id: Option<String>) -> Self {
        self.broker_message_id = broker_message_id;
        self
    }
}

/// A persisted message.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::domain::{
///     ChannelContent, ChatId, MessageDirection, MessageRecord, MessageRecordParams,
///     MessageStatus, RcsContent, TextContent,
/// };
/// use mockable::DefaultClock;
///
/// let content = ChannelContent::Rcs(RcsContent::Text(TextContent::new("hi")));
/// let params = MessageRecordParams::new(
///     ChatId::new(),
///     "+5511999999999",
///     MessageDirection::Outbound,
///     content,
/// );
/// let record = MessageRecord::new(params, &DefaultClock);
///
/// assert_eq!(record.status(), MessageStatus::Queued);
/// assert!(record.error_message().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    id: MessageId,
    chat_id: ChatId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    broker_message_id: Option<String>,
    recipient: String,
    direction: MessageDirection,
    status: MessageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
    content: ChannelContent,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MessageRecord {
    /// Creates a record with a fresh identifier.
    #[must_use]
    pub fn new(params: MessageRecordParams, clock: &impl Clock) -> Self {
        Self::new_with_id(MessageId::new(), params, clock)
    }

    /// Creates a record with a specified identifier.
    #[must_use]
    pub fn new_with_id(id: MessageId, params: MessageRecordParams, clock: &impl Clock) -> Self {
        let now = clock.utc();
        Self {
            id,
            chat_id: params.chat_id,
            broker_message_id: params.broker_message_id,
            recipient: params.recipient,
            direction: params.direction,
            status: params.status,
            error_message: None,
            content: params.content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the owning chat.
    #[must_use]
    pub const fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    /// Returns the provider-side identifier, when known.
    #[must_use]
    pub fn broker_message_id(&self) -> Option<&str> {
        self.broker_message_id.as_deref()
    }

    /// Returns the other party's address.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Returns the message direction.
    #[must_use]
    pub const fn direction(&self) -> MessageDirection {
        self.direction
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn status(&self) -> MessageStatus {
        self.status
    }

    /// Returns the failure reason, if the message failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns the canonical content.
    #[must_use]
    pub const fn content(&self) -> &ChannelContent {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the record to a new lifecycle state.
    pub fn update_status(&mut self, status: MessageStatus, clock: &impl Clock) {
        self.status = status;
        self.updated_at = clock.utc();
    }

    /// Marks the record as failed with the given reason.
    pub fn mark_failed(&mut self, error_message: impl Into<String>, clock: &impl Clock) {
        self.error_message = Some(error_message.into());
        self.update_status(MessageStatus::Failed, clock);
    }
}
