//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces that the domain requires from
//! infrastructure. Adapters implement these ports to connect the domain
//! to brokers, storage, and transports.

pub mod dialect;
pub mod publisher;
pub mod repository;
pub mod validator;

pub use dialect::BrokerDialect;
pub use publisher::MessagePublisher;
pub use repository::MessageRepository;
pub use validator::ContentValidator;
