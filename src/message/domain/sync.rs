//! Notifications emitted to the platform when a message appears or changes.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::{ChannelContent, MessageDirection, MessageId, MessageRecord, MessageStatus};

/// Kind of change a [`SyncEvent`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncEventType {
    /// A new message was stored; the event carries its content.
    Message,
    /// An existing message changed status; no content is attached.
    Status,
}

/// Snapshot of a message record published for platform consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncEvent {
    /// What changed.
    pub event_type: SyncEventType,
    /// Direction of the underlying message.
    pub direction: MessageDirection,
    /// Status after the change.
    pub status: MessageStatus,
    /// Content, for `message` events only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ChannelContent>,
    /// Chat identifier in the consuming platform.
    pub reference_chat_id: String,
    /// The record this event describes.
    pub message_id: MessageId,
    /// Failure reason, if the message failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// When the event was produced.
    pub date: DateTime<Utc>,
}

impl SyncEvent {
    /// Builds an event describing `record`.
    #[must_use]
    pub fn from_record(
        record: &MessageRecord,
        event_type: SyncEventType,
        reference_chat_id: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        let message = match event_type {
            SyncEventType::Message => Some(record.content().clone()),
            SyncEventType::Status => None,
        };
        Self {
            event_type,
            direction: record.direction(),
            status: record.status(),
            message,
            reference_chat_id: reference_chat_id.into(),
            message_id: record.id(),
            error_message: record.error_message().map(ToOwned::to_owned),
            date: clock.utc(),
        }
    }
}
