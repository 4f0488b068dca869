//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogReader` - read-only catalog queries
//! - `ConsultationRepository` - consultation persistence
//! - `ChatHistoryRepository` - stored assistant exchanges
//! - `AIProvider` - chat-completion model

mod ai_provider;
mod catalog_reader;
mod chat_history_repository;
mod consultation_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use catalog_reader::CatalogReader;
pub use chat_history_repository::ChatHistoryRepository;
pub use consultation_repository::ConsultationRepository;
