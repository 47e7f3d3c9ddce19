//! The raw inbound event as delivered by a broker webhook.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untyped broker webhook envelope.
///
/// Only the outer frame is typed here. The shape of `message` depends on
/// `event_type` and is interpreted by a broker dialect, never by the domain.
///
/// Every field defaults when absent, so status-only events such as
/// `{ "status": "..." }` still decode.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::domain::BrokerEnvelope;
/// use serde_json::json;
///
/// let envelope: BrokerEnvelope = serde_json::from_value(json!({
///     "type": "text",
///     "message": { "text": "hello" },
///     "messageId": "abc-123"
/// }))
/// .expect("envelope decodes");
///
/// assert_eq!(envelope.event_type, "text");
/// assert_eq!(envelope.status, "");
/// assert_eq!(envelope.broker_message_id.as_deref(), Some("abc-123"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrokerEnvelope {
    /// Provider-reported event or content kind.
    #[serde(rename = "type", default)]
    pub event_type: String,
    /// Provider free-text status.
    #[serde(default)]
    pub status: String,
    /// Payload whose shape depends on `event_type`.
    #[serde(default)]
    pub message: Value,
    /// Provider-side message identifier, passed through unchanged.
    #[serde(
        rename = "messageId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub broker_message_id: Option<String>,
}

impl BrokerEnvelope {
    /// Creates an envelope without a broker message identifier.
    #[must_use]
    pub fn new(event_type: impl Into<String>, status: impl Into<String>, message: Value) -> Self {
        Self {
            event_type: event_type.into(),
            status: status.into(),
            message,
            broker_message_id: None,
        }
    }

    /// Sets the broker message identifier.
    #[must_use]
    pub fn with_broker_message_id(mut self, broker_message_id: impl Into<String>) -> Self {
        self.broker_message_id = Some(broker_message_id.into());
        self
    }
}
