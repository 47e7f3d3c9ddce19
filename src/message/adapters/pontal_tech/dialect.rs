//! [`BrokerDialect`] implementation for Pontal Tech.

use super::{ClassifierConfig, MappingTable, classify};
use crate::message::{
    domain::{Broker, BrokerEnvelope, ChannelContent, Disposition},
    ports::dialect::{BrokerDialect, DialectResult},
};

/// Reads Pontal Tech webhook envelopes.
///
/// Holds the classification vocabulary and the content dispatch table; both
/// are immutable after construction, so a single dialect can be shared
/// across tasks.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::adapters::pontal_tech::PontalTechDialect;
/// use channels_gateway::message::domain::{BrokerEnvelope, MessageType};
/// use channels_gateway::message::ports::BrokerDialect;
/// use serde_json::json;
///
/// let dialect = PontalTechDialect::new();
/// let envelope = BrokerEnvelope::new(
///     "image",
///     "",
///     json!({
///         "image": {
///             "fileUri": "https://cdn.example.com/a.png",
///             "mimeType": "image/png",
///             "fileName": "a.png"
///         }
///     }),
/// );
///
/// let content = dialect
///     .normalize(&envelope)
///     .expect("well-formed")
///     .expect("supported");
/// assert_eq!(content.message_type(), MessageType::Image);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PontalTechDialect {
    config: ClassifierConfig,
    table: MappingTable,
}

impl PontalTechDialect {
    /// Creates a dialect with the default classification vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dialect with a custom classification vocabulary.
    #[must_use]
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self {
            config,
            table: MappingTable::new(),
        }
    }

    /// Returns the classification vocabulary in use.
    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

impl BrokerDialect for PontalTechDialect {
    fn broker(&self) -> Broker {
        Broker::PontalTech
    }

    fn classify(&self, envelope: &BrokerEnvelope) -> DialectResult<Disposition> {
        classify(envelope, &self.config)
    }

    fn normalize(&self, envelope: &BrokerEnvelope) -> DialectResult<Option<ChannelContent>> {
        let content_type = envelope.event_type.as_str();
        if !self.table.contains(content_type) {
            tracing::debug!(content_type, "unknown Pontal Tech content type");
            return Ok(None);
        }

        let content = self.table.map(content_type, &envelope.message)?;
        if content.is_none() {
            tracing::debug!(content_type, "unsupported Pontal Tech content type");
        }
        Ok(content.map(ChannelContent::Rcs))
    }
}
