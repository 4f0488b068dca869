//! Consultation repository port (write side).

use async_trait::async_trait;

use crate::domain::consultation::Consultation;
use crate::domain::foundation::{ConsultationId, DomainError, UserId};

/// Repository port for Consultation aggregate persistence.
#[async_trait]
pub trait ConsultationRepository: Send + Sync {
    /// Save a new consultation.
    async fn save(&self, consultation: &Consultation) -> Result<(), DomainError>;

    /// Update an existing consultation.
    ///
    /// # Errors
    ///
    /// - `ConsultationNotFound` if the consultation doesn't exist
    async fn update(&self, consultation: &Consultation) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &ConsultationId) -> Result<Option<Consultation>, DomainError>;

    /// Consultations booked by a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Consultation>, DomainError>;
}
