//! Unit tests for Pontal Tech envelope classification.

use super::fixtures::dialect;
use crate::message::{
    adapters::pontal_tech::{
        ClassifierConfig, DUPLICATE_BLOCKED_STATUS, PontalTechDialect, classify,
    },
    domain::{Broker, BrokerEnvelope, Disposition},
    ports::BrokerDialect,
};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case("DELIVERED")]
#[case("READ")]
fn acknowledgements_are_ignored(dialect: PontalTechDialect, #[case] event_type: &str) {
    let envelope = BrokerEnvelope::new(event_type, "ok", Value::Null);

    assert_eq!(dialect.classify(&envelope), Ok(Disposition::Ignore));
}

#[rstest]
fn acknowledgement_wins_over_duplicate_status(dialect: PontalTechDialect) {
    let envelope = BrokerEnvelope::new("READ", DUPLICATE_BLOCKED_STATUS, Value::Null);

    assert_eq!(dialect.classify(&envelope), Ok(Disposition::Ignore));
}

#[rstest]
fn duplicate_status_without_type_is_rejected(dialect: PontalTechDialect) {
    let envelope: BrokerEnvelope =
        serde_json::from_value(json!({ "status": "bloqueado por duplicidade" }))
            .expect("envelope decodes");

    assert_eq!(
        dialect.classify(&envelope),
        Ok(Disposition::DuplicateRejected(
            "bloqueado por duplicidade".to_owned()
        ))
    );
}

#[rstest]
#[case("EXCEPTION")]
#[case("ERROR")]
fn error_types_carry_message_verbatim(dialect: PontalTechDialect, #[case] event_type: &str) {
    let envelope = BrokerEnvelope::new(event_type, "", json!("  Número inválido  "));

    assert_eq!(
        dialect.classify(&envelope),
        Ok(Disposition::ErrorRejected("  Número inválido  ".to_owned()))
    );
}

#[rstest]
fn duplicate_status_is_checked_before_error_type(dialect: PontalTechDialect) {
    let envelope =
        BrokerEnvelope::new("ERROR", DUPLICATE_BLOCKED_STATUS, json!("duplicate message"));

    assert_eq!(
        dialect.classify(&envelope),
        Ok(Disposition::DuplicateRejected(
            DUPLICATE_BLOCKED_STATUS.to_owned()
        ))
    );
}

#[rstest]
#[case(json!({ "code": 42 }), "an object")]
#[case(Value::Null, "null")]
#[case(json!(7), "a number")]
fn non_string_error_message_is_malformed(
    dialect: PontalTechDialect,
    #[case] message: Value,
    #[case] kind: &str,
) {
    let envelope = BrokerEnvelope::new("EXCEPTION", "", message);

    let err = dialect.classify(&envelope).expect_err("message must be a string");

    assert_eq!(err.content_type, "EXCEPTION");
    assert_eq!(err.reason, format!("found {kind}"));
}

#[rstest]
#[case("text")]
#[case("image")]
#[case("carousel")]
#[case("something-new")]
#[case("delivered")]
fn content_and_unknown_types_proceed(dialect: PontalTechDialect, #[case] event_type: &str) {
    let envelope = BrokerEnvelope::new(event_type, "", json!({}));

    assert_eq!(dialect.classify(&envelope), Ok(Disposition::Proceed));
}

#[rstest]
fn duplicate_sentinel_matching_is_exact(dialect: PontalTechDialect) {
    let envelope = BrokerEnvelope::new("text", "Bloqueado por duplicidade", json!({}));

    assert_eq!(dialect.classify(&envelope), Ok(Disposition::Proceed));
}

#[rstest]
fn configured_sentinels_replace_defaults() {
    let config = ClassifierConfig::default().with_duplicate_sentinels(vec!["duplicado".to_owned()]);
    let custom = PontalTechDialect::with_config(config.clone());

    let blocked = BrokerEnvelope::new("text", "duplicado", json!({}));
    let default_sentinel = BrokerEnvelope::new("text", DUPLICATE_BLOCKED_STATUS, json!({}));

    assert_eq!(
        custom.classify(&blocked),
        Ok(Disposition::DuplicateRejected("duplicado".to_owned()))
    );
    assert_eq!(classify(&default_sentinel, &config), Ok(Disposition::Proceed));
    assert_eq!(custom.config(), &config);
}

#[rstest]
fn empty_sentinel_override_keeps_default() {
    let config = ClassifierConfig::default().with_duplicate_sentinels(Vec::new());

    assert_eq!(config, ClassifierConfig::default());
}

#[rstest]
fn dialect_reports_its_broker(dialect: PontalTechDialect) {
    assert_eq!(dialect.broker(), Broker::PontalTech);
}

#[rstest]
fn disposition_helpers() {
    let duplicate = Disposition::DuplicateRejected("dup".to_owned());

    assert!(duplicate.is_rejection());
    assert_eq!(duplicate.rejection_reason(), Some("dup"));
    assert!(Disposition::Proceed.is_proceed());
    assert!(!Disposition::Ignore.is_rejection());
    assert_eq!(Disposition::Ignore.rejection_reason(), None);
}

#[rstest]
fn disposition_serialises_with_reason() {
    let json = serde_json::to_value(Disposition::ErrorRejected("boom".to_owned()))
        .expect("serialise");

    assert_eq!(
        json,
        json!({ "disposition": "error_rejected", "reason": "boom" })
    );
}
