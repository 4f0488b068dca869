//! DTOs for the assistant endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::assistant::ChatReply;
use crate::domain::assistant::ChatExchange;
use crate::domain::foundation::Timestamp;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub success: bool,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            message: reply.message,
            success: reply.success,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchangeResponse {
    pub id: String,
    pub user_message: String,
    pub assistant_response: String,
    pub created_at: Timestamp,
}

impl From<ChatExchange> for ChatExchangeResponse {
    fn from(exchange: ChatExchange) -> Self {
        Self {
            id: exchange.id.to_string(),
            user_message: exchange.user_message,
            assistant_response: exchange.assistant_response,
            created_at: exchange.created_at,
        }
    }
}
