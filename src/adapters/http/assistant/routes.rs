//! HTTP routes for the assistant.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{chat, history, AssistantHandlers};

pub fn assistant_routes(handlers: AssistantHandlers) -> Router {
    Router::new()
        .route("/api/assistant/chat", post(chat))
        .route("/api/assistant/history", get(history))
        .with_state(handlers)
}
