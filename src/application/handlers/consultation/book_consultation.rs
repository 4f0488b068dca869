//! BookConsultationHandler - Command handler for new consultation requests.

use std::sync::Arc;

use crate::domain::consultation::{BookingDetails, Consultation, ConsultationError};
use crate::domain::foundation::UserId;
use crate::ports::ConsultationRepository;

/// Command to book a consultation.
///
/// `user_id` is `None` for visitors who are not signed in.
#[derive(Debug, Clone)]
pub struct BookConsultationCommand {
    pub details: BookingDetails,
    pub user_id: Option<UserId>,
}

pub struct BookConsultationHandler {
    repository: Arc<dyn ConsultationRepository>,
}

impl BookConsultationHandler {
    pub fn new(repository: Arc<dyn ConsultationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: BookConsultationCommand,
    ) -> Result<Consultation, ConsultationError> {
        let consultation = Consultation::book(cmd.details, cmd.user_id)?;

        self.repository.save(&consultation).await?;

        tracing::info!(
            consultation_id = %consultation.id,
            anonymous = consultation.user_id.is_none(),
            "Consultation booked"
        );

        Ok(consultation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::consultation::ConsultationStatus;
    use crate::domain::foundation::{ConsultationId, DomainError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockRepository {
        saved: Mutex<Vec<Consultation>>,
        fail_save: bool,
    }

    impl MockRepository {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: true,
            }
        }
    }

    #[async_trait]
    impl ConsultationRepository for MockRepository {
        async fn save(&self, consultation: &Consultation) -> Result<(), DomainError> {
            if self.fail_save {
                return Err(DomainError::storage("Simulated save failure"));
            }
            self.saved.lock().unwrap().push(consultation.clone());
            Ok(())
        }

        async fn update(&self, _consultation: &Consultation) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &ConsultationId) -> Result<Option<Consultation>, DomainError> {
            Ok(None)
        }

        async fn list_by_user(&self, _user_id: &UserId) -> Result<Vec<Consultation>, DomainError> {
            Ok(vec![])
        }
    }

    fn details() -> BookingDetails {
        BookingDetails {
            client_name: "Mariam Haddad".into(),
            client_email: "mariam@example.com".into(),
            client_phone: "+971 50 123 4567".into(),
            project_type: Some("villa".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn books_pending_consultation_for_user() {
        let repo = Arc::new(MockRepository::new());
        let handler = BookConsultationHandler::new(repo.clone());
        let user = UserId::new("user-1").unwrap();

        let consultation = handler
            .handle(BookConsultationCommand {
                details: details(),
                user_id: Some(user.clone()),
            })
            .await
            .unwrap();

        assert_eq!(consultation.status, ConsultationStatus::Pending);
        assert!(consultation.belongs_to(&user));
        assert_eq!(repo.saved.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn anonymous_booking_is_allowed() {
        let handler = BookConsultationHandler::new(Arc::new(MockRepository::new()));

        let consultation = handler
            .handle(BookConsultationCommand {
                details: details(),
                user_id: None,
            })
            .await
            .unwrap();

        assert!(consultation.user_id.is_none());
    }

    #[tokio::test]
    async fn invalid_email_is_not_saved() {
        let repo = Arc::new(MockRepository::new());
        let handler = BookConsultationHandler::new(repo.clone());
        let mut bad = details();
        bad.client_email = "mariam-at-example".into();

        let err = handler
            .handle(BookConsultationCommand {
                details: bad,
                user_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ConsultationError::ValidationFailed { ref field, .. } if field == "client_email"));
        assert!(repo.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_infrastructure() {
        let handler = BookConsultationHandler::new(Arc::new(MockRepository::failing()));

        let err = handler
            .handle(BookConsultationCommand {
                details: details(),
                user_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ConsultationError::Infrastructure(_)));
    }
}
