//! In-memory consultation repository.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::consultation::Consultation;
use crate::domain::foundation::{ConsultationId, DomainError, ErrorCode, UserId};
use crate::ports::ConsultationRepository;

/// Thread-safe via an internal `RwLock`. Data does not survive restarts.
#[derive(Debug, Default)]
pub struct InMemoryConsultationRepository {
    consultations: RwLock<HashMap<ConsultationId, Consultation>>,
}

impl InMemoryConsultationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::storage("consultation store lock poisoned")
}

#[async_trait]
impl ConsultationRepository for InMemoryConsultationRepository {
    async fn save(&self, consultation: &Consultation) -> Result<(), DomainError> {
        let mut map = self.consultations.write().map_err(|_| poisoned())?;
        if map.contains_key(&consultation.id) {
            return Err(DomainError::storage("consultation already exists")
                .with_detail("consultation_id", consultation.id.to_string()));
        }
        map.insert(consultation.id, consultation.clone());
        Ok(())
    }

    async fn update(&self, consultation: &Consultation) -> Result<(), DomainError> {
        let mut map = self.consultations.write().map_err(|_| poisoned())?;
        match map.get_mut(&consultation.id) {
            Some(existing) => {
                *existing = consultation.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ConsultationNotFound,
                format!("Consultation not found: {}", consultation.id),
            )),
        }
    }

    async fn find_by_id(&self, id: &ConsultationId) -> Result<Option<Consultation>, DomainError> {
        let map = self.consultations.read().map_err(|_| poisoned())?;
        Ok(map.get(id).cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Consultation>, DomainError> {
        let map = self.consultations.read().map_err(|_| poisoned())?;
        let mut list: Vec<Consultation> = map
            .values()
            .filter(|c| c.belongs_to(user_id))
            .cloned()
            .collect();
        list.sort_by_key(|c| Reverse(c.created_at));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::consultation::{BookingDetails, ConsultationStatus};

    fn booking(user: Option<&str>) -> Consultation {
        Consultation::book(
            BookingDetails {
                client_name: "Omar".into(),
                client_email: "omar@example.ae".into(),
                client_phone: "0501234567".into(),
                ..Default::default()
            },
            user.map(|u| UserId::new(u).unwrap()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_then_find() {
        let repo = InMemoryConsultationRepository::new();
        let c = booking(None);
        repo.save(&c).await.unwrap();
        assert_eq!(repo.find_by_id(&c.id).await.unwrap(), Some(c));
    }

    #[tokio::test]
    async fn duplicate_save_is_rejected() {
        let repo = InMemoryConsultationRepository::new();
        let c = booking(None);
        repo.save(&c).await.unwrap();
        assert!(repo.save(&c).await.is_err());
    }

    #[tokio::test]
    async fn update_replaces_stored_copy() {
        let repo = InMemoryConsultationRepository::new();
        let mut c = booking(None);
        repo.save(&c).await.unwrap();

        c.change_status(ConsultationStatus::Confirmed, None).unwrap();
        repo.update(&c).await.unwrap();

        let stored = repo.find_by_id(&c.id).await.unwrap().unwrap();
        assert_eq!(stored.status, ConsultationStatus::Confirmed);
    }

    #[tokio::test]
    async fn update_of_unknown_consultation_is_not_found() {
        let repo = InMemoryConsultationRepository::new();
        let err = repo.update(&booking(None)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConsultationNotFound);
    }

    #[tokio::test]
    async fn list_by_user_only_returns_own_bookings() {
        let repo = InMemoryConsultationRepository::new();
        repo.save(&booking(Some("u1"))).await.unwrap();
        repo.save(&booking(Some("u1"))).await.unwrap();
        repo.save(&booking(Some("u2"))).await.unwrap();
        repo.save(&booking(None)).await.unwrap();

        let mine = repo.list_by_user(&UserId::new("u1").unwrap()).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine[0].created_at >= mine[1].created_at);
    }
}
