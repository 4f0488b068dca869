//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the Noor Interiors domain.

mod auth;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser, UserRole};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    ChatExchangeId, ConsultationId, MaterialId, PricingRowId, ProjectId, ReviewId, UserId,
};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
