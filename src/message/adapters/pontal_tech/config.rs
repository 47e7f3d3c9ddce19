//! Classification vocabulary for Pontal Tech webhooks.

/// Status text Pontal Tech sends when it blocks a duplicate submission.
pub const DUPLICATE_BLOCKED_STATUS: &str = "bloqueado por duplicidade";

/// Event types, statuses, and sentinels the classifier matches against.
///
/// Matching is exact and case-sensitive, as the broker sends them.
///
/// # Examples
///
/// ```
/// use channels_gateway::message::adapters::pontal_tech::ClassifierConfig;
///
/// let config = ClassifierConfig::default();
/// assert!(config.is_acknowledgement("DELIVERED"));
/// assert!(config.is_error("EXCEPTION"));
/// assert!(config.is_duplicate("bloqueado por duplicidade"));
/// assert!(!config.is_duplicate("Bloqueado por duplicidade"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Event types that only acknowledge delivery or reading.
    pub acknowledgement_types: Vec<String>,
    /// Event types whose `message` is a diagnostic string.
    pub error_types: Vec<String>,
    /// Status strings that mean the broker blocked a duplicate.
    pub duplicate_sentinels: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            acknowledgement_types: vec!["DELIVERED".to_owned(), "READ".to_owned()],
            error_types: vec!["EXCEPTION".to_owned(), "ERROR".to_owned()],
            duplicate_sentinels: vec![DUPLICATE_BLOCKED_STATUS.to_owned()],
        }
    }
}

impl ClassifierConfig {
    /// Replaces the duplicate sentinels.
    ///
    /// An empty list keeps the defaults, so a blank override can never
    /// disable duplicate detection.
    #[must_use]
    pub fn with_duplicate_sentinels(mut self, sentinels: Vec<String>) -> Self {
        if !sentinels.is_empty() {
            self.duplicate_sentinels = sentinels;
        }
        self
    }

    /// Returns `true` if `event_type` is a delivery or read acknowledgement.
    #[must_use]
    pub fn is_acknowledgement(&self, event_type: &str) -> bool {
        self.acknowledgement_types.iter().any(|t| t == event_type)
    }

    /// Returns `true` if `event_type` reports an error or exception.
    #[must_use]
    pub fn is_error(&self, event_type: &str) -> bool {
        self.error_types.iter().any(|t| t == event_type)
    }

    /// Returns `true` if `status` is a duplicate-block sentinel.
    #[must_use]
    pub fn is_duplicate(&self, status: &str) -> bool {
        self.duplicate_sentinels.iter().any(|s| s == status)
    }
}
