//! Validated content addressed to a broker for delivery.

use serde::{Deserialize, Serialize};

use super::{Broker, Channel, ChannelContent, MessageId, MessageRecord};

/// A message ready to publish to a broker-specific queue.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::domain::{
///     Broker, ChannelContent, ChatId, MessageDirection, MessageRecord, MessageRecordParams,
///     OutboundMessage, RcsContent, TextContent,
/// };
/// use mockable::DefaultClock;
///
/// let content = ChannelContent::Rcs(RcsContent::Text(TextContent::new("hi")));
/// let params = MessageRecordParams::new(ChatId::new(), "+5511", MessageDirection::Outbound, content);
/// let record = MessageRecord::new(params, &DefaultClock);
///
/// let outbound = OutboundMessage::from_record(&record, Broker::PontalTech);
/// assert_eq!(outbound.routing_key(), "rcs.pontal-tech");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    /// The persisted record being delivered.
    pub message_id: MessageId,
    /// Channel of the content.
    pub channel: Channel,
    /// Broker expected to deliver it.
    pub broker: Broker,
    /// Destination address.
    pub recipient: String,
    /// Canonical content.
    pub content: ChannelContent,
}

impl OutboundMessage {
    /// Builds an outbound message from a stored record.
    #[must_use]
    pub fn from_record(record: &MessageRecord, broker: Broker) -> Self {
        Self {
            message_id: record.id(),
            channel: record.content().channel(),
            broker,
            recipient: record.recipient().to_owned(),
            content: record.content().clone(),
        }
    }

    /// Returns the routing key for the channel/broker pair.
    #[must_use]
    pub fn routing_key(&self) -> String {
        format!("{}.{}", self.channel, self.broker)
    }
}
