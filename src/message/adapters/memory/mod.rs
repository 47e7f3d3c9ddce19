//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing without a database or message broker.

mod message;
mod publisher;

pub use message::InMemoryMessageRepository;
pub use publisher::{InMemoryMessagePublisher, PublishedMessage, SYNC_ROUTING_KEY};
