//! SendChatMessageHandler - asks the Noor assistant a question.
//!
//! Model and storage failures never reach the caller as errors. The user
//! sees the persona's error reply and nothing is stored.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::domain::assistant::{AssistantError, ChatExchange, Persona, MAX_MESSAGE_CHARS};
use crate::domain::foundation::UserId;
use crate::ports::{
    AIError, AIProvider, ChatHistoryRepository, CompletionRequest, MessageRole, RequestMetadata,
};

/// Default time allowed for the model, including its own retries.
pub const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_secs(24);

#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub user_id: UserId,
    pub message: String,
}

/// Reply shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub message: String,
    /// False when the model could not be reached.
    pub success: bool,
}

pub struct SendChatMessageHandler {
    provider: Arc<dyn AIProvider>,
    history: Arc<dyn ChatHistoryRepository>,
    persona: Arc<Persona>,
    reply_timeout: Duration,
}

impl SendChatMessageHandler {
    pub fn new(
        provider: Arc<dyn AIProvider>,
        history: Arc<dyn ChatHistoryRepository>,
        persona: Arc<Persona>,
    ) -> Self {
        Self {
            provider,
            history,
            persona,
            reply_timeout: DEFAULT_REPLY_TIMEOUT,
        }
    }

    /// Caps how long the model may take before the error reply is sent.
    pub fn with_reply_timeout(mut self, reply_timeout: Duration) -> Self {
        self.reply_timeout = reply_timeout;
        self
    }

    fn error_reply(&self) -> ChatReply {
        ChatReply {
            message: self.persona.error_reply.clone(),
            success: false,
        }
    }

    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<ChatReply, AssistantError> {
        if cmd.message.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }
        if cmd.message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(AssistantError::MessageTooLong {
                max: MAX_MESSAGE_CHARS,
            });
        }

        let trace_id = Uuid::new_v4().to_string();
        let request = CompletionRequest::new(RequestMetadata::new(cmd.user_id.clone(), &trace_id))
            .with_system_prompt(self.persona.system_prompt.clone())
            .with_message(MessageRole::User, cmd.message.clone());

        let completion = tokio::time::timeout(self.reply_timeout, self.provider.complete(request))
            .await
            .unwrap_or_else(|_| {
                Err(AIError::Timeout {
                    timeout_secs: self.reply_timeout.as_secs() as u32,
                })
            });

        let response = match completion {
            Ok(response) => response,
            Err(err) => {
                let info = self.provider.provider_info();
                tracing::error!(
                    user_id = %cmd.user_id,
                    trace_id = %trace_id,
                    provider = %info.name,
                    error = %err,
                    "Assistant completion failed"
                );
                return Ok(self.error_reply());
            }
        };

        let reply = self.persona.reply_or_fallback(response.content);
        let exchange = ChatExchange::new(cmd.user_id, cmd.message, reply.clone());
        if let Err(err) = self.history.append(&exchange).await {
            tracing::error!(
                user_id = %exchange.user_id,
                trace_id = %trace_id,
                error = %err,
                "Failed to store assistant exchange"
            );
            return Ok(self.error_reply());
        }

        tracing::debug!(
            trace_id = %trace_id,
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "Assistant replied"
        );

        Ok(ChatReply {
            message: reply,
            success: true,
        })
    }
}
