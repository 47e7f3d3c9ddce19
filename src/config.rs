//! Environment-driven gateway configuration.
//!
//! Values are read through a lookup function so callers (and tests) can
//! supply them without touching the process environment.

use thiserror::Error;

use crate::message::adapters::pontal_tech::ClassifierConfig;

/// Exchange that outbound broker messages are published to.
pub const OUTBOUND_EXCHANGE_ENV: &str = "RCS_OUTBOUND_EXCHANGE_NAME";

/// Dead-letter exchange for outbound messages.
pub const OUTBOUND_DLX_ENV: &str = "RCS_OUTBOUND_EXCHANGE_DLX_NAME";

/// Optional comma-separated override of the duplicate-block sentinels.
pub const DUPLICATE_SENTINELS_ENV: &str = "RCS_DUPLICATE_SENTINELS";

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is unset.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but blank.
    #[error("environment variable {0} must not be empty")]
    Empty(&'static str),
}

/// Transport and classification settings for the gateway.
///
/// # Examples
///
/// ```
/// use channels_gateway::config::GatewayConfig;
///
/// let config = GatewayConfig::from_lookup(|key| match key {
///     "RCS_OUTBOUND_EXCHANGE_NAME" => Some("rcs.outbound".to_owned()),
///     "RCS_OUTBOUND_EXCHANGE_DLX_NAME" => Some("rcs.outbound.dlx".to_owned()),
///     _ => None,
/// })
/// .expect("complete configuration");
///
/// assert_eq!(config.outbound_exchange, "rcs.outbound");
/// assert!(config.classifier_config().is_duplicate("bloqueado por duplicidade"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Exchange for outbound broker messages.
    pub outbound_exchange: String,
    /// Dead-letter exchange for outbound broker messages.
    pub outbound_dead_letter_exchange: String,
    /// Duplicate-block sentinels; empty means the broker defaults.
    pub duplicate_sentinels: Vec<String>,
}

impl GatewayConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let outbound_exchange = required(&lookup, OUTBOUND_EXCHANGE_ENV)?;
        let outbound_dead_letter_exchange = required(&lookup, OUTBOUND_DLX_ENV)?;
        let duplicate_sentinels = lookup(DUPLICATE_SENTINELS_ENV)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            outbound_exchange,
            outbound_dead_letter_exchange,
            duplicate_sentinels,
        })
    }

    /// Returns the classifier vocabulary with any sentinel override applied.
    #[must_use]
    pub fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig::default().with_duplicate_sentinels(self.duplicate_sentinels.clone())
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).ok_or(ConfigError::Missing(key))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty(key));
    }
    Ok(trimmed.to_owned())
}
