//! Validation service implementation.
//!
//! Provides the default implementation of the `ContentValidator` port on
//! top of the rule tables in [`super::rules`].

use serde_json::{Map, Value};

use crate::message::{
    domain::{Channel, ChannelContent, MessageType},
    error::ValidationError,
    ports::validator::{ContentValidator, ValidationResult},
    validation::rules,
};

/// Default implementation of the content validator.
///
/// Applies every rule of the selected variant, collecting errors to provide
/// comprehensive feedback rather than failing on the first error.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::domain::MessageType;
/// use channels_gateway::message::ports::validator::ContentValidator;
/// use channels_gateway::message::validation::service::DefaultContentValidator;
/// use serde_json::json;
///
/// let validator = DefaultContentValidator::new();
/// let content = validator
///     .construct_value(&json!({
///         "type": "rcs",
///         "messageType": "image",
///         "url": "https://x/a.png",
///         "mimeType": "image/png",
///         "fileName": "a.png"
///     }))
///     .expect("valid image");
///
/// assert_eq!(content.message_type(), MessageType::Image);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContentValidator;

impl DefaultContentValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ContentValidator for DefaultContentValidator {
    fn construct(
        &self,
        message_type: MessageType,
        fields: &Map<String, Value>,
    ) -> ValidationResult<ChannelContent> {
        let mut errors = Vec::new();

        collect_tag_errors(message_type, fields, &mut errors);
        rules::check_fields(fields, rules::rules_for(message_type), "", true, &mut errors);

        if !errors.is_empty() {
            return Err(ValidationError::multiple(errors));
        }

        let mut tagged = fields.clone();
        tagged.insert(
            "type".to_owned(),
            Value::String(Channel::Rcs.as_str().to_owned()),
        );
        tagged.insert(
            "messageType".to_owned(),
            Value::String(message_type.as_str().to_owned()),
        );

        serde_json::from_value(Value::Object(tagged))
            .map_err(|e| ValidationError::Undecodable(e.to_string()))
    }

    fn construct_value(&self, candidate: &Value) -> ValidationResult<ChannelContent> {
        let fields = candidate.as_object().ok_or(ValidationError::NotAnObject)?;

        let tag = match fields.get("messageType") {
            None | Some(Value::Null) => {
                return Err(ValidationError::MissingField("messageType".to_owned()));
            }
            Some(Value::String(tag)) => tag,
            Some(_) => {
                return Err(ValidationError::WrongType {
                    field: "messageType".to_owned(),
                    expected: "a string",
                });
            }
        };

        let message_type = MessageType::try_from(tag.as_str())
            .map_err(|e| ValidationError::UnknownMessageType(e.0))?;

        self.construct(message_type, fields)
    }

    fn validate(&self, content: &ChannelContent) -> ValidationResult<()> {
        let value =
            serde_json::to_value(content).map_err(|e| ValidationError::Undecodable(e.to_string()))?;
        let fields = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let mut errors = Vec::new();
        rules::check_fields(
            fields,
            rules::rules_for(content.message_type()),
            "",
            true,
            &mut errors,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::multiple(errors))
        }
    }
}

/// Checks the optional channel and variant tags against the request.
fn collect_tag_errors(
    message_type: MessageType,
    fields: &Map<String, Value>,
    errors: &mut Vec<ValidationError>,
) {
    match fields.get("type") {
        None | Some(Value::Null) => {}
        Some(Value::String(channel)) if Channel::try_from(channel.as_str()).is_ok() => {}
        Some(Value::String(channel)) => {
            errors.push(ValidationError::UnsupportedChannel(channel.clone()));
        }
        Some(_) => errors.push(ValidationError::WrongType {
            field: "type".to_owned(),
            expected: "a string",
        }),
    }

    match fields.get("messageType") {
        None | Some(Value::Null) => {}
        Some(Value::String(tag)) if tag == message_type.as_str() => {}
        Some(Value::String(tag)) => errors.push(ValidationError::MessageTypeMismatch {
            expected: message_type.as_str().to_owned(),
            actual: tag.clone(),
        }),
        Some(_) => errors.push(ValidationError::WrongType {
            field: "messageType".to_owned(),
            expected: "a string",
        }),
    }
}

// Note: unit tests for DefaultContentValidator live in
// src/message/tests/validation_tests.rs.
