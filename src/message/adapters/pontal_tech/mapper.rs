//! Content-type dispatch table for Pontal Tech payloads.
//!
//! The table is keyed by the broker's wire tag and built once from an
//! exhaustive `match` over [`PontalTechContentType`], so a new content kind
//! cannot be added without deciding how it maps.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use super::classifier::json_kind;
use super::payload::{DocumentPayload, FileTextPayload, ImagePayload, TextPayload, VideoPayload};
use crate::message::{
    domain::{RcsContent, TextContent},
    error::MalformedPayloadError,
};

const IMAGE_SHAPE: &str = "{ image: { fileUri, mimeType, fileName } }";
const VIDEO_SHAPE: &str = "{ video: { fileUri, mimeType, fileName } }";
const DOCUMENT_SHAPE: &str = "{ document: { fileUri, mimeType, fileName } }";
const TEXT_SHAPE: &str = "{ text: string }";
const FILE_TEXT_SHAPE: &str = "{ contentType, text: { fileUri, mimeType, fileName } }";

/// Content kinds Pontal Tech reports in the envelope's `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PontalTechContentType {
    /// Image attachment.
    Image,
    /// Plain text, or a file delivered under the text tag.
    Text,
    /// Video attachment.
    Video,
    /// Document attachment.
    Document,
    /// Carousel of cards.
    Carousel,
    /// Single rich card.
    RichCard,
}

impl PontalTechContentType {
    /// Every content kind the broker defines.
    pub const ALL: [Self; 6] = [
        Self::Image,
        Self::Text,
        Self::Video,
        Self::Document,
        Self::Carousel,
        Self::RichCard,
    ];

    /// Returns the broker's wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Text => "text",
            Self::Video => "video",
            Self::Document => "document",
            Self::Carousel => "carousel",
            Self::RichCard => "richCard",
        }
    }
}

impl fmt::Display for PontalTechContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a `message` payload to RCS content; `None` means unsupported.
pub type ContentMapper = fn(&Value) -> Result<Option<RcsContent>, MalformedPayloadError>;

const fn mapper_for(kind: PontalTechContentType) -> ContentMapper {
    match kind {
        PontalTechContentType::Image => map_image,
        PontalTechContentType::Text => map_text,
        PontalTechContentType::Video => map_video,
        PontalTechContentType::Document => map_document,
        // Canonical variants exist for outbound use; inbound mapping is not
        // offered by the broker integration yet.
        PontalTechContentType::Carousel | PontalTechContentType::RichCard => map_unsupported,
    }
}

/// Immutable lookup from wire tag to mapping function.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::adapters::pontal_tech::MappingTable;
/// use channels_gateway::message::domain::MessageType;
/// use serde_json::json;
///
/// let table = MappingTable::new();
/// let content = table
///     .map("text", &json!({ "text": "hello" }))
///     .expect("well-formed")
///     .expect("supported");
/// assert_eq!(content.message_type(), MessageType::Text);
///
/// assert_eq!(table.map("carousel", &json!({})), Ok(None));
/// assert_eq!(table.map("sticker", &json!({})), Ok(None));
/// ```
#[derive(Clone)]
pub struct MappingTable {
    mappers: HashMap<&'static str, ContentMapper>,
}

impl MappingTable {
    /// Builds the table for every Pontal Tech content kind.
    #[must_use]
    pub fn new() -> Self {
        let mappers = PontalTechContentType::ALL
            .into_iter()
            .map(|kind| (kind.as_str(), mapper_for(kind)))
            .collect();
        Self { mappers }
    }

    /// Returns `true` if the table has an entry for `content_type`.
    #[must_use]
    pub fn contains(&self, content_type: &str) -> bool {
        self.mappers.contains_key(content_type)
    }

    /// Maps a payload reported under `content_type`.
    ///
    /// Unknown tags and unsupported kinds both yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayloadError` if the payload lacks the fields the
    /// tag requires.
    pub fn map(
        &self,
        content_type: &str,
        message: &Value,
    ) -> Result<Option<RcsContent>, MalformedPayloadError> {
        self.mappers
            .get(content_type)
            .map_or(Ok(None), |mapper| mapper(message))
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.mappers.keys().collect();
        tags.sort_unstable();
        f.debug_struct("MappingTable").field("tags", &tags).finish()
    }
}

fn decode<'a, T: Deserialize<'a>>(
    message: &'a Value,
    content_type: PontalTechContentType,
    expected: &'static str,
) -> Result<T, MalformedPayloadError> {
    T::deserialize(message)
        .map_err(|e| MalformedPayloadError::new(content_type.as_str(), expected, e.to_string()))
}

fn map_image(message: &Value) -> Result<Option<RcsContent>, MalformedPayloadError> {
    let payload: ImagePayload = decode(message, PontalTechContentType::Image, IMAGE_SHAPE)?;
    Ok(Some(RcsContent::Image(payload.image.into())))
}

fn map_video(message: &Value) -> Result<Option<RcsContent>, MalformedPayloadError> {
    let payload: VideoPayload = decode(message, PontalTechContentType::Video, VIDEO_SHAPE)?;
    Ok(Some(RcsContent::Video(payload.video.into())))
}

fn map_document(message: &Value) -> Result<Option<RcsContent>, MalformedPayloadError> {
    let payload: DocumentPayload =
        decode(message, PontalTechContentType::Document, DOCUMENT_SHAPE)?;
    Ok(Some(RcsContent::Document(payload.document.into())))
}

/// The broker overloads `text`: a populated `contentType` marks a file
/// delivered as text, which maps to a document.
fn map_text(message: &Value) -> Result<Option<RcsContent>, MalformedPayloadError> {
    if has_content_type(message) {
        let payload: FileTextPayload =
            decode(message, PontalTechContentType::Text, FILE_TEXT_SHAPE)?;
        return Ok(Some(RcsContent::Document(payload.text.into())));
    }

    let payload: TextPayload = decode(message, PontalTechContentType::Text, TEXT_SHAPE)?;
    Ok(Some(RcsContent::Text(TextContent::new(payload.text))))
}

const fn map_unsupported(_message: &Value) -> Result<Option<RcsContent>, MalformedPayloadError> {
    Ok(None)
}

fn has_content_type(message: &Value) -> bool {
    match message.get("contentType") {
        None | Some(Value::Null | Value::Bool(false)) => false,
        Some(Value::String(content_type)) => !content_type.trim().is_empty(),
        Some(other) => {
            tracing::debug!(
                kind = json_kind(other),
                "non-string contentType treated as populated"
            );
            true
        }
    }
}
