//! ListConsultationsHandler - Query handler for a user's own bookings.

use std::sync::Arc;

use crate::domain::consultation::{Consultation, ConsultationError};
use crate::domain::foundation::UserId;
use crate::ports::ConsultationRepository;

#[derive(Debug, Clone)]
pub struct ListConsultationsQuery {
    pub user_id: UserId,
}

pub struct ListConsultationsHandler {
    repository: Arc<dyn ConsultationRepository>,
}

impl ListConsultationsHandler {
    pub fn new(repository: Arc<dyn ConsultationRepository>) -> Self {
        Self { repository }
    }

    /// Returns the user's consultations, newest first.
    pub async fn handle(
        &self,
        query: ListConsultationsQuery,
    ) -> Result<Vec<Consultation>, ConsultationError> {
        let mut consultations = self.repository.list_by_user(&query.user_id).await?;
        consultations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(consultations)
    }
}
