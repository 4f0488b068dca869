//! Assistant domain - the Noor persona and stored chat exchanges.

mod errors;
mod exchange;
mod persona;

pub use errors::AssistantError;
pub use exchange::ChatExchange;
pub use persona::{
    Persona, DEFAULT_ERROR_REPLY, DEFAULT_FALLBACK_REPLY, DEFAULT_HISTORY_LIMIT,
    DEFAULT_SYSTEM_PROMPT, MAX_MESSAGE_CHARS,
};
