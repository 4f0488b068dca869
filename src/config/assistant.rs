//! Design-assistant configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::assistant::{
    Persona, DEFAULT_ERROR_REPLY, DEFAULT_FALLBACK_REPLY, DEFAULT_HISTORY_LIMIT,
    DEFAULT_SYSTEM_PROMPT,
};

/// Upper bound for `history_limit`.
const MAX_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Exchanges returned by the history endpoint.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Shown when the model answers with nothing.
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,

    /// Shown when the model cannot be reached.
    #[serde(default = "default_error_reply")]
    pub error_reply: String,
}

impl AssistantConfig {
    pub fn persona(&self) -> Persona {
        Persona {
            system_prompt: self.system_prompt.clone(),
            fallback_reply: self.fallback_reply.clone(),
            error_reply: self.error_reply.clone(),
            history_limit: self.history_limit,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_limit == 0 || self.history_limit > MAX_HISTORY_LIMIT {
            return Err(ValidationError::InvalidHistoryLimit);
        }
        for (name, text) in [
            ("system_prompt", &self.system_prompt),
            ("fallback_reply", &self.fallback_reply),
            ("error_reply", &self.error_reply),
        ] {
            if text.trim().is_empty() {
                return Err(ValidationError::EmptyAssistantText(name));
            }
        }
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            history_limit: default_history_limit(),
            fallback_reply: default_fallback_reply(),
            error_reply: default_error_reply(),
        }
    }
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_fallback_reply() -> String {
    DEFAULT_FALLBACK_REPLY.to_string()
}

fn default_error_reply() -> String {
    DEFAULT_ERROR_REPLY.to_string()
}
