//! Persisted question/answer pairs between a user and the assistant.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChatExchangeId, Timestamp, UserId};

/// One stored exchange. Both texts are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub id: ChatExchangeId,
    pub user_id: UserId,
    pub user_message: String,
    pub assistant_response: String,
    pub created_at: Timestamp,
}

impl ChatExchange {
    pub fn new(
        user_id: UserId,
        user_message: impl Into<String>,
        assistant_response: impl Into<String>,
    ) -> Self {
        Self {
            id: ChatExchangeId::new(),
            user_id,
            user_message: user_message.into(),
            assistant_response: assistant_response.into(),
            created_at: Timestamp::now(),
        }
    }
}
