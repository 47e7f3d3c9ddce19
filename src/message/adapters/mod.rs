//! Adapters for the message module.
//!
//! This module provides concrete implementations of the ports, following
//! hexagonal architecture principles. Adapters handle all infrastructure and
//! provider concerns while the domain remains pure.
//!
//! # Available Adapters
//!
//! - [`pontal_tech::PontalTechDialect`]: webhook classification and content
//!   mapping for the Pontal Tech RCS broker
//! - [`memory::InMemoryMessageRepository`]: thread-safe in-memory storage for
//!   unit testing
//! - [`memory::InMemoryMessagePublisher`]: records publications for unit
//!   testing

pub mod memory;
pub mod pontal_tech;
