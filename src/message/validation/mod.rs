//! Content validation and schema derivation.
//!
//! This module provides the field rule tables for every canonical content
//! variant, the default validator built on them, and the schema generator
//! that documents them.

pub mod rules;
pub mod schema;
pub mod service;

pub use service::DefaultContentValidator;
