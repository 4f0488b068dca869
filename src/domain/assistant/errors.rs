//! Assistant error types.
//!
//! Model failures are not errors at this level: the assistant answers with
//! its configured error reply instead.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssistantError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message exceeds {max} characters")]
    MessageTooLong { max: usize },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AssistantError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssistantError::EmptyMessage => ErrorCode::EmptyField,
            AssistantError::MessageTooLong { .. } => ErrorCode::OutOfRange,
            AssistantError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for AssistantError {
    fn from(err: DomainError) -> Self {
        AssistantError::Infrastructure(err.to_string())
    }
}
