//! JSON-schema-like descriptions derived from the field rule tables.
//!
//! Schemas are generated on demand from [`super::rules::rules_for`], never
//! maintained by hand, so documentation always matches what validation
//! enforces.

use serde_json::{Map, Value, json};

use super::rules::{FieldFormat, FieldRule, rules_for};
use crate::message::domain::{Channel, MessageType};

/// Returns the schema for a single RCS content variant.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::domain::MessageType;
/// use channels_gateway::message::validation::schema::content_schema;
///
/// let schema = content_schema(MessageType::Text);
/// assert_eq!(schema["properties"]["messageType"]["const"], "text");
/// assert_eq!(schema["properties"]["text"]["maxLength"], 5000);
/// assert_eq!(schema["additionalProperties"], false);
/// ```
#[must_use]
pub fn content_schema(message_type: MessageType) -> Value {
    let mut properties = Map::new();
    properties.insert(
        "type".to_owned(),
        json!({ "const": Channel::Rcs.as_str(), "description": "Channel tag." }),
    );
    properties.insert(
        "messageType".to_owned(),
        json!({ "const": message_type.as_str(), "description": "Variant tag." }),
    );

    let mut schema = object_schema(rules_for(message_type), properties);
    if let Some(object) = schema.as_object_mut() {
        object.insert("title".to_owned(), Value::String(schema_title(message_type)));
        if let Some(required) = object.get_mut("required").and_then(Value::as_array_mut) {
            required.insert(0, Value::String("messageType".to_owned()));
            required.insert(0, Value::String("type".to_owned()));
        }
    }
    schema
}

/// Returns the schema for the whole RCS content union.
///
/// The union is a `oneOf` over every variant, discriminated by
/// `messageType`.
#[must_use]
pub fn rcs_content_schema() -> Value {
    let variants: Vec<Value> = MessageType::ALL.into_iter().map(content_schema).collect();
    let mapping: Map<String, Value> = MessageType::ALL
        .into_iter()
        .map(|kind| (kind.as_str().to_owned(), Value::String(schema_title(kind))))
        .collect();

    json!({
        "title": "RcsContent",
        "oneOf": variants,
        "discriminator": {
            "propertyName": "messageType",
            "mapping": mapping,
        },
    })
}

fn schema_title(message_type: MessageType) -> String {
    let name = match message_type {
        MessageType::Text => "Text",
        MessageType::Image => "Image",
        MessageType::Video => "Video",
        MessageType::Document => "Document",
        MessageType::RichCard => "RichCard",
        MessageType::Carousel => "Carousel",
    };
    format!("Rcs{name}Content")
}

fn object_schema(rules: &[FieldRule], mut properties: Map<String, Value>) -> Value {
    let required: Vec<Value> = rules
        .iter()
        .filter(|rule| rule.required)
        .map(|rule| Value::String(rule.name.to_owned()))
        .collect();

    for rule in rules {
        properties.insert(rule.name.to_owned(), field_schema(rule));
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

fn field_schema(rule: &FieldRule) -> Value {
    let mut schema = Map::new();
    schema.insert(
        "description".to_owned(),
        Value::String(rule.description.to_owned()),
    );

    match rule.format {
        FieldFormat::List(item_rules) => {
            schema.insert("type".to_owned(), Value::String("array".to_owned()));
            schema.insert("items".to_owned(), object_schema(item_rules, Map::new()));
            return Value::Object(schema);
        }
        FieldFormat::Url => {
            schema.insert("format".to_owned(), Value::String("uri".to_owned()));
        }
        FieldFormat::MimeType => {
            schema.insert("format".to_owned(), Value::String("mime-type".to_owned()));
        }
        FieldFormat::Text => {}
    }

    schema.insert("type".to_owned(), Value::String("string".to_owned()));
    if rule.non_empty {
        schema.insert("minLength".to_owned(), Value::from(1_u64));
    }
    if let Some(max) = rule.max_length {
        schema.insert("maxLength".to_owned(), Value::from(max));
    }
    Value::Object(schema)
}
