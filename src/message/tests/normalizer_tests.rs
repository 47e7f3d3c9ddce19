//! Unit tests for Pontal Tech payload normalisation.

use super::fixtures::{dialect, envelope, file_reference};
use crate::message::{
    adapters::pontal_tech::{MappingTable, PontalTechContentType, PontalTechDialect},
    domain::{ChannelContent, FileContent, MessageType, RcsContent, TextContent},
    error::MalformedPayloadError,
    ports::BrokerDialect,
};
use rstest::rstest;
use serde_json::{Value, json};

fn normalise(dialect: &PontalTechDialect, event_type: &str, message: Value) -> ChannelContent {
    dialect
        .normalize(&envelope(event_type, message))
        .expect("well-formed payload")
        .expect("supported content")
}

// ============================================================================
// Concrete mappings
// ============================================================================

#[rstest]
fn image_payload_maps_to_image(dialect: PontalTechDialect) {
    let content = normalise(
        &dialect,
        "image",
        json!({ "image": file_reference("https://x/a.png", "image/png", "a.png") }),
    );

    assert_eq!(
        content,
        ChannelContent::Rcs(RcsContent::Image(FileContent::new(
            "https://x/a.png",
            "image/png",
            "a.png"
        )))
    );
}

#[rstest]
#[case("image", MessageType::Image)]
#[case("video", MessageType::Video)]
#[case("document", MessageType::Document)]
fn attachment_payloads_keep_their_kind(
    dialect: PontalTechDialect,
    #[case] event_type: &str,
    #[case] expected: MessageType,
) {
    let mut message = serde_json::Map::new();
    message.insert(
        event_type.to_owned(),
        file_reference("https://x/f", "application/octet-stream", "f"),
    );

    let content = normalise(&dialect, event_type, Value::Object(message));

    assert_eq!(content.message_type(), expected);
    let ChannelContent::Rcs(rcs) = content;
    assert_eq!(
        rcs.file(),
        Some(&FileContent::new("https://x/f", "application/octet-stream", "f"))
    );
}

#[rstest]
fn plain_text_payload_maps_to_text(dialect: PontalTechDialect) {
    let content = normalise(&dialect, "text", json!({ "text": "hello" }));

    assert_eq!(
        content,
        ChannelContent::Rcs(RcsContent::Text(TextContent::new("hello")))
    );
}

#[rstest]
fn text_with_content_type_maps_to_document(dialect: PontalTechDialect) {
    let content = normalise(
        &dialect,
        "text",
        json!({
            "contentType": "application/pdf",
            "text": file_reference("https://x/a.pdf", "application/pdf", "a.pdf")
        }),
    );

    assert_eq!(
        content,
        ChannelContent::Rcs(RcsContent::Document(FileContent::new(
            "https://x/a.pdf",
            "application/pdf",
            "a.pdf"
        )))
    );
}

// ============================================================================
// Disambiguation
// ============================================================================

#[rstest]
#[case(json!(null))]
#[case(json!(false))]
#[case(json!(""))]
#[case(json!("   "))]
fn unpopulated_content_type_falls_back_to_text(dialect: PontalTechDialect, #[case] probe: Value) {
    let content = normalise(
        &dialect,
        "text",
        json!({ "contentType": probe, "text": "hello" }),
    );

    assert_eq!(content.message_type(), MessageType::Text);
}

#[rstest]
#[case(json!("image/jpeg"))]
#[case(json!({ "kind": "file" }))]
#[case(json!(1))]
#[case(json!(true))]
fn populated_content_type_selects_document(dialect: PontalTechDialect, #[case] probe: Value) {
    let content = normalise(
        &dialect,
        "text",
        json!({
            "contentType": probe,
            "text": file_reference("https://x/b.jpg", "image/jpeg", "b.jpg")
        }),
    );

    assert_eq!(content.message_type(), MessageType::Document);
}

#[rstest]
fn populated_content_type_with_string_text_is_malformed(dialect: PontalTechDialect) {
    let err = dialect
        .normalize(&envelope(
            "text",
            json!({ "contentType": "application/pdf", "text": "hello" }),
        ))
        .expect_err("text must be a file reference");

    assert_eq!(err.content_type, "text");
    assert!(err.expected.contains("fileUri"));
}

// ============================================================================
// Unsupported and unknown kinds
// ============================================================================

#[rstest]
#[case("carousel", json!({ "items": [] }))]
#[case("richCard", json!({ "title": "Offer" }))]
#[case("sticker", json!({ "sticker": {} }))]
#[case("rich-card", json!({}))]
#[case("", Value::Null)]
fn unsupported_kinds_are_dropped(
    dialect: PontalTechDialect,
    #[case] event_type: &str,
    #[case] message: Value,
) {
    assert_eq!(dialect.normalize(&envelope(event_type, message)), Ok(None));
}

// ============================================================================
// Malformed payloads
// ============================================================================

#[rstest]
#[case("image", json!({ "video": {} }))]
#[case("image", json!({ "image": { "fileUri": "https://x/a.png", "mimeType": "image/png" } }))]
#[case("video", json!("just a string"))]
#[case("document", Value::Null)]
#[case("text", json!({}))]
#[case("text", json!({ "text": 5 }))]
fn missing_nested_fields_are_malformed(
    dialect: PontalTechDialect,
    #[case] event_type: &str,
    #[case] message: Value,
) {
    let err = dialect
        .normalize(&envelope(event_type, message))
        .expect_err("payload is malformed");

    assert_eq!(err.content_type, event_type);
    assert!(!err.reason.is_empty());
}

#[rstest]
fn malformed_error_names_expected_shape(dialect: PontalTechDialect) {
    let err = dialect
        .normalize(&envelope("video", json!({})))
        .expect_err("video key missing");

    assert_eq!(err.expected, "{ video: { fileUri, mimeType, fileName } }");
    assert!(err.to_string().starts_with("malformed 'video' payload"));
}

// ============================================================================
// Purity
// ============================================================================

#[rstest]
#[case("image", json!({ "image": file_reference("https://x/a.png", "image/png", "a.png") }))]
#[case("text", json!({ "text": "hello" }))]
#[case("carousel", json!({}))]
#[case("video", json!({}))]
fn classify_then_normalise_is_idempotent(
    dialect: PontalTechDialect,
    #[case] event_type: &str,
    #[case] message: Value,
) {
    let input = envelope(event_type, message);
    let run = || -> Result<Option<ChannelContent>, MalformedPayloadError> {
        let disposition = dialect.classify(&input)?;
        assert!(disposition.is_proceed());
        dialect.normalize(&input)
    };

    assert_eq!(run(), run());
}

#[rstest]
fn mapping_table_covers_every_content_type() {
    let table = MappingTable::new();

    for kind in PontalTechContentType::ALL {
        assert!(table.contains(kind.as_str()), "missing {kind}");
    }
    assert!(!table.contains("sticker"));
    assert_eq!(PontalTechContentType::RichCard.as_str(), "richCard");
}
