//! HTTP handlers for the assistant endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::assistant::{
    GetChatHistoryHandler, GetChatHistoryQuery, SendChatMessageCommand, SendChatMessageHandler,
};
use crate::domain::assistant::AssistantError;

use super::dto::{ChatExchangeResponse, ChatRequest, ChatResponse};

#[derive(Clone)]
pub struct AssistantHandlers {
    chat_handler: Arc<SendChatMessageHandler>,
    history_handler: Arc<GetChatHistoryHandler>,
}

impl AssistantHandlers {
    pub fn new(
        chat_handler: Arc<SendChatMessageHandler>,
        history_handler: Arc<GetChatHistoryHandler>,
    ) -> Self {
        Self {
            chat_handler,
            history_handler,
        }
    }
}

/// POST /api/assistant/chat - Ask Noor
///
/// A model outage still answers 200 with `success: false`.
pub async fn chat(
    State(handlers): State<AssistantHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<ChatRequest>,
) -> Response {
    let cmd = SendChatMessageCommand {
        user_id: user.id,
        message: req.message,
    };

    match handlers.chat_handler.handle(cmd).await {
        Ok(reply) => (StatusCode::OK, Json(ChatResponse::from(reply))).into_response(),
        Err(e) => handle_assistant_error(e),
    }
}

/// GET /api/assistant/history - Recent exchanges, newest first
pub async fn history(
    State(handlers): State<AssistantHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetChatHistoryQuery { user_id: user.id };

    match handlers.history_handler.handle(query).await {
        Ok(exchanges) => {
            let response: Vec<ChatExchangeResponse> =
                exchanges.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assistant_error(e),
    }
}

fn handle_assistant_error(error: AssistantError) -> Response {
    match error {
        AssistantError::EmptyMessage | AssistantError::MessageTooLong { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(error.code(), error.to_string())),
        )
            .into_response(),
        AssistantError::Infrastructure(msg) => ApiError::internal(msg).into_response(),
    }
}
