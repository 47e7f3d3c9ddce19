//! Domain types for the message subsystem.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! All types are serialisable via serde.

mod channel;
mod content;
mod disposition;
mod envelope;
mod ids;
mod outbound;
mod record;
mod sync;

pub use channel::{
    Broker, Channel, MessageType, ParseBrokerError, ParseChannelError, ParseMessageTypeError,
};
pub use content::{
    CarouselContent, CarouselItem, ChannelContent, FileContent, RcsContent, RichCardContent,
    TextContent,
};
pub use disposition::Disposition;
pub use envelope::BrokerEnvelope;
pub use ids::{ChatId, MessageId};
pub use outbound::OutboundMessage;
pub use record::{
    MessageDirection, MessageRecord, MessageRecordParams, MessageStatus,
    ParseMessageDirectionError, ParseMessageStatusError,
};
pub use sync::{SyncEvent, SyncEventType};
