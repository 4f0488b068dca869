//! AI Provider Adapters.
//!
//! - `MockAIProvider` - Configurable mock for tests and key-less development
//! - `OpenAIProvider` - OpenAI-compatible chat-completions API

mod mock_provider;
mod openai_provider;

pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{
    OpenAIConfig, OpenAIProvider, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
};
