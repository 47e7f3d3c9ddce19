//! Application services for the message subsystem.
//!
//! Services orchestrate domain operations and coordinate between ports,
//! implementing the inbound and outbound workflows.

mod inbound;
mod outbound;

#[cfg(test)]
mod outbound_tests;

pub use inbound::{InboundContext, InboundOutcome, InboundWebhookService, Rejection};
pub use outbound::{OutboundMessageService, OutboundRequest};
