//! UpdateConsultationStatusHandler - Command handler for staff status changes.
//!
//! Callers are expected to have checked the admin role already.

use std::sync::Arc;

use crate::domain::consultation::{Consultation, ConsultationError, ConsultationStatus};
use crate::domain::foundation::ConsultationId;
use crate::ports::ConsultationRepository;

#[derive(Debug, Clone)]
pub struct UpdateConsultationStatusCommand {
    pub consultation_id: ConsultationId,
    pub status: ConsultationStatus,
    pub notes: Option<String>,
}

pub struct UpdateConsultationStatusHandler {
    repository: Arc<dyn ConsultationRepository>,
}

impl UpdateConsultationStatusHandler {
    pub fn new(repository: Arc<dyn ConsultationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateConsultationStatusCommand,
    ) -> Result<Consultation, ConsultationError> {
        let mut consultation = self
            .repository
            .find_by_id(&cmd.consultation_id)
            .await?
            .ok_or(ConsultationError::NotFound(cmd.consultation_id))?;

        let previous = consultation.status;
        consultation.change_status(cmd.status, cmd.notes)?;

        self.repository.update(&consultation).await?;

        tracing::info!(
            consultation_id = %consultation.id,
            from = %previous,
            to = %consultation.status,
            "Consultation status changed"
        );

        Ok(consultation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryConsultationRepository;
    use crate::domain::consultation::BookingDetails;

    async fn seeded() -> (Arc<InMemoryConsultationRepository>, ConsultationId) {
        let repo = Arc::new(InMemoryConsultationRepository::new());
        let consultation = Consultation::book(
            BookingDetails {
                client_name: "Omar".into(),
                client_email: "omar@example.com".into(),
                client_phone: "0501111111".into(),
                ..Default::default()
            },
            None,
        )
        .unwrap();
        let id = consultation.id;
        repo.save(&consultation).await.unwrap();
        (repo, id)
    }

    #[tokio::test]
    async fn confirms_pending_consultation_with_notes() {
        let (repo, id) = seeded().await;
        let handler = UpdateConsultationStatusHandler::new(repo.clone());

        let updated = handler
            .handle(UpdateConsultationStatusCommand {
                consultation_id: id,
                status: ConsultationStatus::Confirmed,
                notes: Some("Site visit Tuesday".into()),
            })
            .await
            .unwrap();

        assert_eq!(updated.status, ConsultationStatus::Confirmed);
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.status, ConsultationStatus::Confirmed);
        assert_eq!(stored.notes.as_deref(), Some("Site visit Tuesday"));
    }

    #[tokio::test]
    async fn skipping_confirmation_is_rejected() {
        let (repo, id) = seeded().await;
        let handler = UpdateConsultationStatusHandler::new(repo.clone());

        let err = handler
            .handle(UpdateConsultationStatusCommand {
                consultation_id: id,
                status: ConsultationStatus::Completed,
                notes: None,
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ConsultationError::InvalidTransition {
                from: ConsultationStatus::Pending,
                to: ConsultationStatus::Completed,
            }
        );
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.status, ConsultationStatus::Pending);
    }

    #[tokio::test]
    async fn unknown_consultation_is_not_found() {
        let handler =
            UpdateConsultationStatusHandler::new(Arc::new(InMemoryConsultationRepository::new()));
        let id = ConsultationId::new();

        let err = handler
            .handle(UpdateConsultationStatusCommand {
                consultation_id: id,
                status: ConsultationStatus::Cancelled,
                notes: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, ConsultationError::NotFound(id));
    }
}
