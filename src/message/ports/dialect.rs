//! Broker dialect port.
//!
//! A dialect isolates one provider's webhook field names and nesting. Adding
//! a broker means implementing this trait; the canonical content model does
//! not change.

use crate::message::{
    domain::{Broker, BrokerEnvelope, ChannelContent, Disposition},
    error::MalformedPayloadError,
};

/// Result type for dialect operations.
pub type DialectResult<T> = Result<T, MalformedPayloadError>;

/// Port for interpreting a broker's webhook envelopes.
///
/// # Implementation Notes
///
/// Implementations must be pure: the same envelope always yields the same
/// result, with no shared mutable state, so transports can retry freely.
pub trait BrokerDialect: Send + Sync {
    /// Returns the broker this dialect understands.
    fn broker(&self) -> Broker;

    /// Decides what to do with an envelope before any content is read.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayloadError` if a diagnostic payload does not have
    /// the shape its event type requires.
    fn classify(&self, envelope: &BrokerEnvelope) -> DialectResult<Disposition>;

    /// Maps an envelope classified as `Proceed` to canonical content.
    ///
    /// Returns `Ok(None)` for content kinds that are not (yet) supported;
    /// callers drop those silently.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayloadError` if the payload lacks the nested
    /// fields its content type requires.
    fn normalize(&self, envelope: &BrokerEnvelope) -> DialectResult<Option<ChannelContent>>;
}
