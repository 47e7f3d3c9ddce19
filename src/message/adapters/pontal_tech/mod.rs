//! Pontal Tech RCS broker dialect.
//!
//! Pontal Tech reports every webhook as a flat envelope whose `type` doubles
//! as event kind and content kind. The [`classify`] step filters out
//! acknowledgements, duplicate blocks, and errors; the [`MappingTable`] turns
//! the remaining payloads into canonical RCS content.

mod classifier;
mod config;
mod dialect;
mod mapper;
mod payload;

pub use classifier::classify;
pub use config::{ClassifierConfig, DUPLICATE_BLOCKED_STATUS};
pub use dialect::PontalTechDialect;
pub use mapper::{ContentMapper, MappingTable, PontalTechContentType};
