//! GetChatHistoryHandler - recent assistant exchanges for one user.

use std::sync::Arc;

use crate::domain::assistant::{AssistantError, ChatExchange};
use crate::domain::foundation::UserId;
use crate::ports::ChatHistoryRepository;

#[derive(Debug, Clone)]
pub struct GetChatHistoryQuery {
    pub user_id: UserId,
}

pub struct GetChatHistoryHandler {
    history: Arc<dyn ChatHistoryRepository>,
    limit: usize,
}

impl GetChatHistoryHandler {
    pub fn new(history: Arc<dyn ChatHistoryRepository>, limit: usize) -> Self {
        Self { history, limit }
    }

    /// Newest first, at most `limit` exchanges.
    pub async fn handle(&self, query: GetChatHistoryQuery) -> Result<Vec<ChatExchange>, AssistantError> {
        Ok(self
            .history
            .recent_for_user(&query.user_id, self.limit)
            .await?)
    }
}
