//! In-memory implementation of the `MessageRepository` port.
//!
//! Provides a simple, thread-safe repository for unit testing
//! without database dependencies. Not suitable for production use.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::message::{
    domain::{ChatId, MessageId, MessageRecord},
    error::RepositoryError,
    ports::repository::{MessageRepository, RepositoryResult},
};

/// In-memory implementation of [`MessageRepository`].
///
/// Thread-safe via internal [`RwLock`]. Suitable for unit tests only.
///
/// # Example
///
/// ```
/// use channels_gateway::message::adapters::memory::InMemoryMessageRepository;
///
/// let repo = InMemoryMessageRepository::new();
/// assert!(repo.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageRepository {
    records: Arc<RwLock<HashMap<MessageId, MessageRecord>>>,
}

impl InMemoryMessageRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty repository. For error-propagating access, use
    /// the repository trait methods instead.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn store(&self, record: &MessageRecord) -> RepositoryResult<()> {
        let mut guard = self
            .records
            .write()
            .map_err(|e| RepositoryError::connection(format!("lock poisoned: {e}")))?;

        if guard.contains_key(&record.id()) {
            return Err(RepositoryError::DuplicateMessage(record.id()));
        }

        if let Some(broker_id) = record.broker_message_id()
            && guard
                .values()
                .any(|r| r.broker_message_id() == Some(broker_id))
        {
            return Err(RepositoryError::DuplicateBrokerMessageId(
                broker_id.to_owned(),
            ));
        }

        guard.insert(record.id(), record.clone());
        Ok(())
    }

    async fn update(&self, record: &MessageRecord) -> RepositoryResult<()> {
        let mut guard = self
            .records
            .write()
            .map_err(|e| RepositoryError::connection(format!("lock poisoned: {e}")))?;

        let Some(slot) = guard.get_mut(&record.id()) else {
            return Err(RepositoryError::NotFound(record.id()));
        };
        *slot = record.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: MessageId) -> RepositoryResult<Option<MessageRecord>> {
        let guard = self
            .records
            .read()
            .map_err(|e| RepositoryError::connection(format!("lock poisoned: {e}")))?;

        Ok(guard.get(&id).cloned())
    }

    async fn find_by_broker_message_id(
        &self,
        broker_message_id: &str,
    ) -> RepositoryResult<Option<MessageRecord>> {
        let guard = self
            .records
            .read()
            .map_err(|e| RepositoryError::connection(format!("lock poisoned: {e}")))?;

        Ok(guard
            .values()
            .find(|r| r.broker_message_id() == Some(broker_message_id))
            .cloned())
    }

    async fn find_by_chat(&self, chat_id: ChatId) -> RepositoryResult<Vec<MessageRecord>> {
        let guard = self
            .records
            .read()
            .map_err(|e| RepositoryError::connection(format!("lock poisoned: {e}")))?;

        let mut records: Vec<MessageRecord> = guard
            .values()
            .filter(|r| r.chat_id() == chat_id)
            .cloned()
            .collect();

        // Creation time, then id, for a stable order.
        records.sort_by_key(|r| (r.created_at(), r.id().into_inner()));

        Ok(records)
    }
}
