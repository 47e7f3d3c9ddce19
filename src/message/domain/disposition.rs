//! Outcome of classifying a broker envelope before normalisation.

use serde::{Deserialize, Serialize};

/// What the caller must do with an inbound envelope.
///
/// Rejections are first-class outcomes: they represent valid provider
/// signalling, not defects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "disposition", content = "reason", rename_all = "snake_case")]
pub enum Disposition {
    /// Delivery or read acknowledgement; there is no content to extract.
    Ignore,
    /// The broker blocked the message as a duplicate. Carries the status.
    DuplicateRejected(String),
    /// The broker reported an error. Carries the provider message verbatim.
    ErrorRejected(String),
    /// The envelope carries content and should be normalised.
    Proceed,
}

impl Disposition {
    /// Returns `true` if the envelope should be handed to the normaliser.
    #[must_use]
    pub const fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }

    /// Returns `true` for either rejection outcome.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::DuplicateRejected(_) | Self::ErrorRejected(_))
    }

    /// Returns the rejection reason, if this is a rejection.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            Self::DuplicateRejected(reason) | Self::ErrorRejected(reason) => Some(reason),
            Self::Ignore | Self::Proceed => None,
        }
    }
}
