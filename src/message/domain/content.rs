//! Canonical message content, independent of any broker's wire shape.
//!
//! Content is a closed two-level union: [`ChannelContent`] is tagged by the
//! channel (`type`), and each channel owns its own variant set. For RCS that
//! set is [`RcsContent`], tagged by `messageType`.
//!
//! Image, video, and document content share the [`FileContent`] field group
//! but stay distinct variants, because downstream consumers dispatch on
//! `messageType` rather than on field shape.

use serde::{Deserialize, Serialize};

use super::{Channel, MessageType};

/// Canonical content for any supported channel.
///
/// # Serialisation
///
/// Both tags are flattened into one object:
///
/// ```json
/// { "type": "rcs", "messageType": "text", "text": "hello" }
/// ```
///
/// # Examples
///
/// ```
/// use channels_gateway::message::domain::{ChannelContent, MessageType, RcsContent, TextContent};
///
/// let content = ChannelContent::Rcs(RcsContent::Text(TextContent::new("hello")));
/// assert_eq!(content.message_type(), MessageType::Text);
///
/// let json = serde_json::to_value(&content).expect("serialise");
/// assert_eq!(json["type"], "rcs");
/// assert_eq!(json["messageType"], "text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChannelContent {
    /// RCS content.
    Rcs(RcsContent),
}

impl ChannelContent {
    /// Returns the channel this content belongs to.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        match self {
            Self::Rcs(_) => Channel::Rcs,
        }
    }

    /// Returns the `messageType` discriminant of the inner variant.
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        match self {
            Self::Rcs(content) => content.message_type(),
        }
    }
}

impl From<RcsContent> for ChannelContent {
    fn from(content: RcsContent) -> Self {
        Self::Rcs(content)
    }
}

/// The closed set of RCS content variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "messageType", rename_all = "kebab-case")]
pub enum RcsContent {
    /// Plain text.
    Text(TextContent),
    /// Image attachment.
    Image(FileContent),
    /// Video attachment.
    Video(FileContent),
    /// Document attachment.
    Document(FileContent),
    /// Single rich card.
    RichCard(RichCardContent),
    /// Ordered carousel of cards.
    Carousel(CarouselContent),
}

impl RcsContent {
    /// Returns the `messageType` discriminant.
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        match self {
            Self::Text(_) => MessageType::Text,
            Self::Image(_) => MessageType::Image,
            Self::Video(_) => MessageType::Video,
            Self::Document(_) => MessageType::Document,
            Self::RichCard(_) => MessageType::RichCard,
            Self::Carousel(_) => MessageType::Carousel,
        }
    }

    /// Returns the file field group for image, video, and document content.
    #[must_use]
    pub const fn file(&self) -> Option<&FileContent> {
        match self {
            Self::Image(file) | Self::Video(file) | Self::Document(file) => Some(file),
            Self::Text(_) | Self::RichCard(_) | Self::Carousel(_) => None,
        }
    }
}

/// Plain text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    /// The message body.
    pub text: String,
}

impl TextContent {
    /// Creates text content.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Field group shared by image, video, and document content.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::domain::{FileContent, RcsContent};
///
/// let file = FileContent::new("https://cdn.example.com/a.png", "image/png", "a.png");
/// let image = RcsContent::Image(file.clone());
/// assert_eq!(image.file(), Some(&file));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    /// Where the file can be fetched.
    pub url: String,
    /// MIME type of the file.
    pub mime_type: String,
    /// Display name of the file.
    pub file_name: String,
}

impl FileContent {
    /// Creates a file field group.
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        mime_type: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            mime_type: mime_type.into(),
            file_name: file_name.into(),
        }
    }
}

/// A single rich card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichCardContent {
    /// Card title.
    pub title: String,
    /// Optional card body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Media shown on the card.
    pub file_url: String,
}

impl RichCardContent {
    /// Creates a rich card without a description.
    #[must_use]
    pub fn new(title: impl Into<String>, file_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            file_url: file_url.into(),
        }
    }

    /// Sets the card description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An ordered carousel of cards.
///
/// Item order is presentation order and is preserved through serialisation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarouselContent {
    /// Cards in presentation order.
    pub items: Vec<CarouselItem>,
}

impl CarouselContent {
    /// Creates a carousel from items in presentation order.
    #[must_use]
    pub const fn new(items: Vec<CarouselItem>) -> Self {
        Self { items }
    }

    /// Appends a card to the end of the carousel.
    #[must_use]
    pub fn with_item(mut self, item: CarouselItem) -> Self {
        self.items.push(item);
        self
    }
}

/// A single card within a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselItem {
    /// Card title.
    pub title: String,
    /// Optional card body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Media shown on the card.
    pub file_url: String,
}

impl CarouselItem {
    /// Creates a carousel card without a description.
    #[must_use]
    pub fn new(title: impl Into<String>, file_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            file_url: file_url.into(),
        }
    }

    /// Sets the card description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
