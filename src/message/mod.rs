//! Canonical message content and broker normalisation.
//!
//! This module implements the canonical RCS content model, its validation
//! rules, the broker dialects that map webhook payloads onto it, and the
//! services that persist and publish the result.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::ChannelContent`], [`domain::RcsContent`], [`domain::MessageRecord`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::BrokerDialect`], [`ports::ContentValidator`], [`ports::MessageRepository`], [`ports::MessagePublisher`])
//! - **Adapters**: Concrete implementations ([`adapters::pontal_tech::PontalTechDialect`], [`adapters::memory::InMemoryMessageRepository`])
//! - **Validation**: Field rules shared by construction, re-validation, and schema generation
//! - **Services**: Inbound webhook ingestion and outbound submission
//!
//! # Example
//!
//! ```
//! use channels_gateway::message::adapters::pontal_tech::PontalTechDialect;
//! use channels_gateway::message::domain::{BrokerEnvelope, Disposition, MessageType};
//! use channels_gateway::message::ports::{BrokerDialect, ContentValidator};
//! use channels_gateway::message::validation::DefaultContentValidator;
//! use serde_json::json;
//!
//! let dialect = PontalTechDialect::new();
//! let envelope = BrokerEnvelope::new("text", "", json!({ "text": "Hello!" }));
//!
//! assert_eq!(dialect.classify(&envelope), Ok(Disposition::Proceed));
//! let content = dialect
//!     .normalize(&envelope)
//!     .expect("well-formed payload")
//!     .expect("supported content");
//! assert_eq!(content.message_type(), MessageType::Text);
//!
//! let validator = DefaultContentValidator::new();
//! validator.validate(&content).expect("validation should pass");
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
