//! HTTP adapter for the Noor design assistant.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatExchangeResponse, ChatRequest, ChatResponse};
pub use handlers::AssistantHandlers;
pub use routes::assistant_routes;
