//! Status and error classification for Pontal Tech envelopes.

use serde_json::Value;

use super::ClassifierConfig;
use crate::message::{
    domain::{BrokerEnvelope, Disposition},
    error::MalformedPayloadError,
};

const ERROR_MESSAGE_SHAPE: &str = "a string diagnostic in `message`";

/// Classifies an envelope before any attempt to read it as content.
///
/// Precedence:
/// 1. acknowledgement event types are ignored;
/// 2. a duplicate-block status rejects the envelope with that status;
/// 3. error event types reject it with the `message` string verbatim;
/// 4. anything else proceeds to normalisation.
///
/// Duplicate and error checks run first because in those cases `message`
/// is a diagnostic, not a content payload.
///
/// # Errors
///
/// Returns `MalformedPayloadError` if an error event's `message` is not a
/// string.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::adapters::pontal_tech::{ClassifierConfig, classify};
/// use channels_gateway::message::domain::{BrokerEnvelope, Disposition};
/// use serde_json::Value;
///
/// let config = ClassifierConfig::default();
/// let envelope = BrokerEnvelope::new("DELIVERED", "ok", Value::Null);
/// assert_eq!(classify(&envelope, &config), Ok(Disposition::Ignore));
/// ```
pub fn classify(
    envelope: &BrokerEnvelope,
    config: &ClassifierConfig,
) -> Result<Disposition, MalformedPayloadError> {
    if config.is_acknowledgement(&envelope.event_type) {
        return Ok(Disposition::Ignore);
    }

    if config.is_duplicate(&envelope.status) {
        return Ok(Disposition::DuplicateRejected(envelope.status.clone()));
    }

    if config.is_error(&envelope.event_type) {
        return match &envelope.message {
            Value::String(message) => Ok(Disposition::ErrorRejected(message.clone())),
            other => Err(MalformedPayloadError::new(
                envelope.event_type.clone(),
                ERROR_MESSAGE_SHAPE,
                format!("found {}", json_kind(other)),
            )),
        };
    }

    Ok(Disposition::Proceed)
}

pub(super) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
