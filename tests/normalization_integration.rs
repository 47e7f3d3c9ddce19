//! Behavioural integration tests for broker payload normalisation.
//!
//! These tests exercise the public pipeline end to end: an envelope is
//! decoded from raw webhook JSON, classified, normalised, and re-validated
//! against the same rules that generate the published schema.

use channels_gateway::message::{
    adapters::pontal_tech::PontalTechDialect,
    domain::{BrokerEnvelope, ChannelContent, Disposition, FileContent, RcsContent, TextContent},
    ports::{BrokerDialect, ContentValidator},
    validation::{DefaultContentValidator, schema::rcs_content_schema},
};
use serde_json::{Value, json};

fn decode(raw: Value) -> BrokerEnvelope {
    serde_json::from_value(raw).expect("webhook decodes")
}

fn pipeline(raw: Value) -> (Disposition, Option<ChannelContent>) {
    let dialect = PontalTechDialect::new();
    let envelope = decode(raw);
    let disposition = dialect.classify(&envelope).expect("classifiable");
    if !disposition.is_proceed() {
        return (disposition, None);
    }
    let content = dialect.normalize(&envelope).expect("well-formed");
    (disposition, content)
}

// ============================================================================
// Scenario: Image webhook becomes image content
// ============================================================================

#[test]
fn image_webhook_becomes_image_content() {
    // Arrange
    let raw = json!({
        "type": "image",
        "message": {
            "image": {
                "fileUri": "https://x/a.png",
                "mimeType": "image/png",
                "fileName": "a.png"
            }
        }
    });

    // Act
    let (disposition, content) = pipeline(raw);

    // Assert
    assert_eq!(disposition, Disposition::Proceed);
    let image = content.expect("supported");
    assert_eq!(
        image,
        ChannelContent::Rcs(RcsContent::Image(FileContent::new(
            "https://x/a.png",
            "image/png",
            "a.png"
        )))
    );
    DefaultContentValidator::new()
        .validate(&image)
        .expect("normalised content is valid");
}

// ============================================================================
// Scenario: Text webhooks disambiguate on contentType
// ============================================================================

#[test]
fn text_webhook_becomes_text_content() {
    let (_, content) = pipeline(json!({ "type": "text", "message": { "text": "hello" } }));

    assert_eq!(
        content,
        Some(ChannelContent::Rcs(RcsContent::Text(TextContent::new("hello"))))
    );
}

#[test]
fn file_as_text_webhook_becomes_document_content() {
    let (_, content) = pipeline(json!({
        "type": "text",
        "message": {
            "contentType": "application/pdf",
            "text": {
                "fileUri": "https://x/a.pdf",
                "mimeType": "application/pdf",
                "fileName": "a.pdf"
            }
        }
    }));

    assert_eq!(
        content,
        Some(ChannelContent::Rcs(RcsContent::Document(FileContent::new(
            "https://x/a.pdf",
            "application/pdf",
            "a.pdf"
        ))))
    );
}

// ============================================================================
// Scenario: Status-only webhooks never reach the normaliser
// ============================================================================

#[test]
fn delivery_receipt_is_ignored() {
    let (disposition, content) = pipeline(json!({ "type": "DELIVERED", "status": "ok" }));

    assert_eq!(disposition, Disposition::Ignore);
    assert!(content.is_none());
}

#[test]
fn duplicate_block_is_rejected_with_status() {
    let (disposition, _) = pipeline(json!({ "status": "bloqueado por duplicidade" }));

    assert_eq!(
        disposition,
        Disposition::DuplicateRejected("bloqueado por duplicidade".to_owned())
    );
}

#[test]
fn exception_is_rejected_with_message() {
    let (disposition, _) = pipeline(json!({
        "type": "EXCEPTION",
        "status": "",
        "message": "Template não aprovado"
    }));

    assert_eq!(
        disposition,
        Disposition::ErrorRejected("Template não aprovado".to_owned())
    );
}

// ============================================================================
// Scenario: Unsupported kinds degrade to a silent drop
// ============================================================================

#[test]
fn carousel_webhook_is_unsupported() {
    let (disposition, content) = pipeline(json!({
        "type": "carousel",
        "message": { "carousel": [{ "title": "One" }] }
    }));

    assert_eq!(disposition, Disposition::Proceed);
    assert!(content.is_none());
}

// ============================================================================
// Scenario: Normalised output conforms to the published schema
// ============================================================================

#[test]
fn normalised_output_matches_a_schema_variant() {
    let schema = rcs_content_schema();
    let (_, content) = pipeline(json!({
        "type": "video",
        "message": {
            "video": {
                "fileUri": "https://x/v.mp4",
                "mimeType": "video/mp4",
                "fileName": "v.mp4"
            }
        }
    }));
    let json = serde_json::to_value(content.expect("supported")).expect("serialise");

    let tag = json["messageType"].as_str().expect("tag");
    let title = schema["discriminator"]["mapping"][tag]
        .as_str()
        .expect("mapped variant");
    let variant = schema["oneOf"]
        .as_array()
        .expect("variants")
        .iter()
        .find(|v| v["title"] == title)
        .expect("variant schema");

    let allowed = variant["properties"].as_object().expect("properties");
    assert!(json.as_object().expect("object").keys().all(|k| allowed.contains_key(k)));
    for required in variant["required"].as_array().expect("required") {
        let name = required.as_str().expect("field name");
        assert!(json.get(name).is_some(), "missing {name}");
    }
}
