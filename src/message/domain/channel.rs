//! Channel, broker, and message-type discriminants.
//!
//! These enums are the closed vocabularies the rest of the gateway keys on:
//! the messaging channel a content union belongs to, the broker that carries
//! it, and the `messageType` tag that selects a content variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Messaging channel a canonical content union belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Rich Communication Services.
    Rcs,
}

impl Channel {
    /// Every supported channel.
    pub const ALL: [Self; 1] = [Self::Rcs];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rcs => "rcs",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Channel {
    type Error = ParseChannelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rcs" => Ok(Self::Rcs),
            _ => Err(ParseChannelError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a channel name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown channel: {0}")]
pub struct ParseChannelError(pub String);

/// Third-party provider that delivers messages for a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Broker {
    /// Pontal Tech RCS gateway.
    PontalTech,
}

impl Broker {
    /// Every supported broker.
    pub const ALL: [Self; 1] = [Self::PontalTech];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PontalTech => "pontal-tech",
        }
    }
}

impl fmt::Display for Broker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Broker {
    type Error = ParseBrokerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pontal-tech" | "pontal_tech" => Ok(Self::PontalTech),
            _ => Err(ParseBrokerError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a broker name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown broker: {0}")]
pub struct ParseBrokerError(pub String);

/// Discriminant selecting a canonical content variant.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::domain::MessageType;
///
/// let parsed = MessageType::try_from("rich-card").expect("known type");
/// assert_eq!(parsed, MessageType::RichCard);
/// assert_eq!(parsed.to_string(), "rich-card");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    /// Plain text.
    Text,
    /// Image file attachment.
    Image,
    /// Video file attachment.
    Video,
    /// Document file attachment.
    Document,
    /// Single card with a title, optional description, and media.
    RichCard,
    /// Ordered sequence of cards.
    Carousel,
}

impl MessageType {
    /// Every message type, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Text,
        Self::Image,
        Self::Video,
        Self::Document,
        Self::RichCard,
        Self::Carousel,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Document => "document",
            Self::RichCard => "rich-card",
            Self::Carousel => "carousel",
        }
    }

    /// Returns `true` for the variants that share the file field group.
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::Image | Self::Video | Self::Document)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MessageType {
    type Error = ParseMessageTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ParseMessageTypeError(value.to_owned()))
    }
}

/// Error returned while parsing a message type tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message type: {0}")]
pub struct ParseMessageTypeError(pub String);
