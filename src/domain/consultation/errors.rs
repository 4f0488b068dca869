//! Consultation-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | InvalidTransition | 409 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::{ConsultationId, DomainError, ErrorCode, ValidationError};

use super::ConsultationStatus;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsultationError {
    #[error("Consultation not found: {0}")]
    NotFound(ConsultationId),

    #[error("Cannot move consultation from {from} to {to}")]
    InvalidTransition {
        from: ConsultationStatus,
        to: ConsultationStatus,
    },

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ConsultationError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConsultationError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ConsultationError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ConsultationError::NotFound(_) => ErrorCode::ConsultationNotFound,
            ConsultationError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            ConsultationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ConsultationError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for ConsultationError {
    fn from(err: ValidationError) -> Self {
        ConsultationError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ConsultationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ConsultationError::ValidationFailed {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            _ => ConsultationError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_keeps_field() {
        let err: ConsultationError = ValidationError::empty_field("client_phone").into();
        assert!(matches!(err, ConsultationError::ValidationFailed { ref field, .. } if field == "client_phone"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn storage_failure_becomes_infrastructure() {
        let err: ConsultationError = DomainError::storage("disk full").into();
        assert_eq!(err.code(), ErrorCode::StorageError);
    }

    #[test]
    fn invalid_transition_names_both_states() {
        let err = ConsultationError::InvalidTransition {
            from: ConsultationStatus::Completed,
            to: ConsultationStatus::Pending,
        };
        assert_eq!(err.to_string(), "Cannot move consultation from completed to pending");
    }
}
