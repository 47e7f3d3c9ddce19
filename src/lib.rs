//! Channels gateway: canonical messaging-channel content for broker webhooks.
//!
//! This crate turns the loosely typed webhook events of messaging-channel
//! brokers into a closed, validated content model, and carries that content
//! through persistence and publishing ports.
//!
//! # Architecture
//!
//! The gateway follows hexagonal architecture principles:
//!
//! - **Domain**: Pure content and record types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for brokers, storage, and transport
//! - **Adapters**: Concrete implementations of ports (broker dialects, in-memory stores)
//!
//! # Modules
//!
//! - [`message`]: Canonical content, broker normalisation, and message services
//! - [`config`]: Environment-driven gateway configuration

pub mod config;
pub mod message;
