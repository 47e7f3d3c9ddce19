//! Error types for content validation, normalisation, and message handling.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use super::domain::MessageId;
use thiserror::Error;

/// Errors produced when canonical content violates its field rules.
///
/// Validation never stops at the first problem: every violated constraint
/// is reported, combined with [`ValidationError::multiple`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The candidate is not a JSON object.
    #[error("content must be a JSON object")]
    NotAnObject,

    /// The channel tag is not one this validator accepts.
    #[error("unsupported channel '{0}'")]
    UnsupportedChannel(String),

    /// The `messageType` tag names no known variant.
    #[error("unknown message type '{0}'")]
    UnknownMessageType(String),

    /// The declared `messageType` disagrees with the requested variant.
    #[error("message type '{actual}' does not match expected '{expected}'")]
    MessageTypeMismatch {
        /// The variant being constructed.
        expected: String,
        /// The tag found in the candidate.
        actual: String,
    },

    /// A required field is absent or null.
    #[error("field '{0}' is required")]
    MissingField(String),

    /// A field is present but not part of the variant's shape.
    #[error("field '{0}' is not allowed for this message type")]
    UnexpectedField(String),

    /// A field has the wrong JSON type.
    #[error("field '{field}' must be {expected}")]
    WrongType {
        /// Path of the offending field.
        field: String,
        /// Human-readable expected type.
        expected: &'static str,
    },

    /// A field that must be non-empty is empty.
    #[error("field '{0}' must not be empty")]
    EmptyField(String),

    /// A field exceeds its maximum length.
    #[error("field '{field}' has {actual} characters, exceeds limit of {max}")]
    TooLong {
        /// Path of the offending field.
        field: String,
        /// Maximum allowed length in characters.
        max: usize,
        /// Actual length in characters.
        actual: usize,
    },

    /// A field is not a well-formed URL.
    #[error("field '{0}' must be a well-formed URL")]
    InvalidUrl(String),

    /// A field is not a syntactically valid MIME type.
    #[error("field '{0}' must be a valid MIME type")]
    InvalidMimeType(String),

    /// Content passed every rule but could not be decoded or encoded.
    #[error("content could not be decoded: {0}")]
    Undecodable(String),

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines validation errors into a single error.
    ///
    /// A single error is returned directly rather than wrapped, and nested
    /// `Multiple` errors are flattened.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if called with an empty vector, as this
    /// indicates a logic error in the caller. In release builds, returns an
    /// `Undecodable` error.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        let mut flattened: Vec<Self> = Vec::with_capacity(errors.len());
        for error in errors {
            match error {
                Self::Multiple(inner) => flattened.extend(inner),
                other => flattened.push(other),
            }
        }

        match flattened.len() {
            0 => {
                debug_assert!(false, "multiple() called with empty errors vector");
                Self::Undecodable("internal error: no validation errors".to_owned())
            }
            1 => flattened.into_iter().next().unwrap_or_else(|| {
                Self::Undecodable("internal error: no validation errors".to_owned())
            }),
            _ => Self::Multiple(flattened),
        }
    }

    /// Returns `true` if this error represents multiple validation failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns the field path this error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField(field)
            | Self::UnexpectedField(field)
            | Self::EmptyField(field)
            | Self::InvalidUrl(field)
            | Self::InvalidMimeType(field)
            | Self::WrongType { field, .. }
            | Self::TooLong { field, .. } => Some(field),
            Self::NotAnObject
            | Self::UnsupportedChannel(_)
            | Self::UnknownMessageType(_)
            | Self::MessageTypeMismatch { .. }
            | Self::Undecodable(_)
            | Self::Multiple(_) => None,
        }
    }

    /// Returns every field path named by this error, in report order.
    ///
    /// # Examples
    ///
    /// ```
    /// use channels_gateway::message::error::ValidationError;
    ///
    /// let error = ValidationError::multiple(vec![
    ///     ValidationError::InvalidUrl("url".to_owned()),
    ///     ValidationError::InvalidMimeType("mimeType".to_owned()),
    /// ]);
    /// assert_eq!(error.fields(), vec!["url", "mimeType"]);
    /// ```
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Self::Multiple(errors) => errors.iter().filter_map(|error| error.field()).collect(),
            other => other.field().into_iter().collect(),
        }
    }
}

/// A broker payload does not have the nested shape its tag requires.
///
/// Fatal to the single event; the transport layer drops or dead-letters it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed '{content_type}' payload, expected {expected}: {reason}")]
pub struct MalformedPayloadError {
    /// The broker-reported tag the payload was read under.
    pub content_type: String,
    /// Description of the shape the tag requires.
    pub expected: &'static str,
    /// What went wrong while reading the payload.
    pub reason: String,
}

impl MalformedPayloadError {
    /// Creates a malformed payload error.
    #[must_use]
    pub fn new(
        content_type: impl Into<String>,
        expected: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            expected,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during message persistence.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The message was not found.
    #[error("message not found: {0}")]
    NotFound(MessageId),

    /// A message with this ID already exists.
    #[error("duplicate message: {0}")]
    DuplicateMessage(MessageId),

    /// A message with this broker message ID already exists.
    #[error("duplicate broker message id: {0}")]
    DuplicateBrokerMessageId(String),

    /// A connection error occurred.
    #[error("connection error: {0}")]
    Connection(String),
}

impl RepositoryError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}

/// Errors that can occur while publishing to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    /// The transport refused the message.
    #[error("message rejected by transport: {0}")]
    Rejected(String),

    /// The payload could not be serialised.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The transport is unreachable.
    #[error("connection error: {0}")]
    Connection(String),
}

impl PublishError {
    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}

/// Errors that abort ingestion of a single inbound envelope.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The envelope does not match the shape its tag requires.
    #[error(transparent)]
    Malformed(#[from] MalformedPayloadError),

    /// The normalised content violates its field rules.
    #[error("normalised content is invalid: {0}")]
    Validation(#[from] ValidationError),

    /// Persistence failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Publishing the sync notification failed.
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Errors that abort an outbound submission.
#[derive(Debug, Error)]
pub enum OutboundError {
    /// The submitted content violates its field rules.
    #[error("outbound content is invalid: {0}")]
    Validation(#[from] ValidationError),

    /// Persistence failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The message was stored but could not be published.
    #[error("message {message_id} could not be published: {source}")]
    Publish {
        /// The record that was marked as failed.
        message_id: MessageId,
        /// The underlying transport error.
        source: PublishError,
    },
}
