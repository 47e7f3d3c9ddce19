//! Pontal Tech webhook `message` payload shapes.
//!
//! These mirror the broker's wire format and never leave this adapter.

use serde::Deserialize;

use crate::message::domain::FileContent;

/// File reference nested under the content-kind key.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FileReference {
    pub(super) file_uri: String,
    pub(super) mime_type: String,
    pub(super) file_name: String,
}

impl From<FileReference> for FileContent {
    fn from(file: FileReference) -> Self {
        Self::new(file.file_uri, file.mime_type, file.file_name)
    }
}

/// `{ "image": { fileUri, mimeType, fileName } }`
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ImagePayload {
    pub(super) image: FileReference,
}

/// `{ "video": { fileUri, mimeType, fileName } }`
#[derive(Debug, Clone, Deserialize)]
pub(super) struct VideoPayload {
    pub(super) video: FileReference,
}

/// `{ "document": { fileUri, mimeType, fileName } }`
#[derive(Debug, Clone, Deserialize)]
pub(super) struct DocumentPayload {
    pub(super) document: FileReference,
}

/// `{ "text": "..." }`
#[derive(Debug, Clone, Deserialize)]
pub(super) struct TextPayload {
    pub(super) text: String,
}

/// A file delivered under the `text` tag:
/// `{ "contentType": "...", "text": { fileUri, mimeType, fileName } }`
#[derive(Debug, Clone, Deserialize)]
pub(super) struct FileTextPayload {
    pub(super) text: FileReference,
}
