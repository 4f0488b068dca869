//! In-memory chat history.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::assistant::ChatExchange;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ChatHistoryRepository;

/// Append-only log of exchanges in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryChatHistory {
    exchanges: RwLock<Vec<ChatExchange>>,
}

impl InMemoryChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.exchanges.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> DomainError {
    DomainError::storage("chat history lock poisoned")
}

#[async_trait]
impl ChatHistoryRepository for InMemoryChatHistory {
    async fn append(&self, exchange: &ChatExchange) -> Result<(), DomainError> {
        self.exchanges
            .write()
            .map_err(|_| poisoned())?
            .push(exchange.clone());
        Ok(())
    }

    async fn recent_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<ChatExchange>, DomainError> {
        let exchanges = self.exchanges.read().map_err(|_| poisoned())?;
        // Insertion order is chronological, so walking backwards yields newest first.
        Ok(exchanges
            .iter()
            .rev()
            .filter(|e| &e.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }
}
