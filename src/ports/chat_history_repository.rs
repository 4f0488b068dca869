//! Chat history port - stored assistant exchanges.

use async_trait::async_trait;

use crate::domain::assistant::ChatExchange;
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    /// Append one exchange.
    async fn append(&self, exchange: &ChatExchange) -> Result<(), DomainError>;

    /// A user's most recent exchanges, newest first, at most `limit`.
    async fn recent_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<ChatExchange>, DomainError>;
}
