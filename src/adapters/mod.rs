//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - chat-completion providers (OpenAI-compatible, mock)
//! - `memory` - in-memory catalog, consultations and chat history
//! - `http` - axum REST API

pub mod ai;
pub mod http;
pub mod memory;
