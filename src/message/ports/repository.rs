//! Repository port for message record persistence.
//!
//! Defines the abstract interface for storing and retrieving message
//! records, allowing different persistence implementations.

use crate::message::{
    domain::{ChatId, MessageId, MessageRecord},
    error::RepositoryError,
};
use async_trait::async_trait;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Port for message record persistence.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Record IDs are unique across the entire system
/// - A broker message ID is stored at most once
/// - Concurrent access is handled safely
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if:
    /// - A record with the same ID already exists
    /// - A record with the same broker message ID already exists
    /// - The storage backend fails
    async fn store(&self, record: &MessageRecord) -> RepositoryResult<()>;

    /// Replaces an existing record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has this ID, or
    /// another `RepositoryError` if the storage backend fails.
    async fn update(&self, record: &MessageRecord) -> RepositoryResult<()>;

    /// Retrieves a record by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    async fn find_by_id(&self, id: MessageId) -> RepositoryResult<Option<MessageRecord>>;

    /// Retrieves a record by the broker's message ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    async fn find_by_broker_message_id(
        &self,
        broker_message_id: &str,
    ) -> RepositoryResult<Option<MessageRecord>>;

    /// Retrieves every record for a chat, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    async fn find_by_chat(&self, chat_id: ChatId) -> RepositoryResult<Vec<MessageRecord>>;
}
