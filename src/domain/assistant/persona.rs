//! The "Noor" design-assistant persona and its canned replies.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SYSTEM_PROMPT: &str = "أنت نور، مساعد ذكي متخصص في التصميم الداخلي والتشطيبات. تقدم استشارات محترفة ومفيدة بالعربية. كن ودوداً ومفيداً.";

/// Sent when the model returns an empty reply.
pub const DEFAULT_FALLBACK_REPLY: &str = "عذراً، لم أستطع الرد على سؤالك.";

/// Sent when the model cannot be reached.
pub const DEFAULT_ERROR_REPLY: &str = "عذراً، حدث خطأ ما. يرجى محاولة لاحقاً.";

pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Longest user message accepted, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4_000;

/// Prompt and reply texts used by the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub system_prompt: String,
    pub fallback_reply: String,
    pub error_reply: String,
    pub history_limit: usize,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
            error_reply: DEFAULT_ERROR_REPLY.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Persona {
    /// Picks the text shown to the user for a model reply.
    ///
    /// Returns the reply unchanged unless it is blank.
    pub fn reply_or_fallback(&self, reply: String) -> String {
        if reply.trim().is_empty() {
            self.fallback_reply.clone()
        } else {
            reply
        }
    }
}
