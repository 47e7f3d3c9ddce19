//! Validator port for canonical content.
//!
//! Defines the abstract interface for constructing and checking content
//! against its field rules.

use serde_json::{Map, Value};

use crate::message::{
    domain::{ChannelContent, MessageType},
    error::ValidationError,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for content construction and validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect all violations before returning (not fail-fast)
/// - Use `ValidationError::multiple` to combine errors
/// - Be stateless and thread-safe
pub trait ContentValidator: Send + Sync {
    /// Constructs a variant of `message_type` from a candidate field map.
    ///
    /// The map may carry the `type` and `messageType` tags; when present
    /// they must agree with the requested channel and variant.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing every violated field constraint.
    fn construct(
        &self,
        message_type: MessageType,
        fields: &Map<String, Value>,
    ) -> ValidationResult<ChannelContent>;

    /// Constructs content from a candidate whose tags select the variant.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the candidate is not an object, its
    /// tags are missing or unknown, or any field constraint is violated.
    fn construct_value(&self, candidate: &Value) -> ValidationResult<ChannelContent>;

    /// Re-checks an already-typed instance against the field rules.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing every violated field constraint.
    fn validate(&self, content: &ChannelContent) -> ValidationResult<()>;
}
