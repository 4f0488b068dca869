//! DTOs for consultation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::consultation::{BookingDetails, Consultation, ConsultationStatus};
use crate::domain::foundation::Timestamp;

/// Booking form body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookConsultationRequest {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<Timestamp>,
}

impl From<BookConsultationRequest> for BookingDetails {
    fn from(req: BookConsultationRequest) -> Self {
        BookingDetails {
            client_name: req.client_name,
            client_email: req.client_email,
            client_phone: req.client_phone,
            project_type: req.project_type,
            description: req.description,
            preferred_date: req.preferred_date,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ConsultationStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationResponse {
    pub id: String,
    pub user_id: Option<String>,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub project_type: Option<String>,
    pub description: Option<String>,
    pub preferred_date: Option<Timestamp>,
    pub status: ConsultationStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Consultation> for ConsultationResponse {
    fn from(c: Consultation) -> Self {
        Self {
            id: c.id.to_string(),
            user_id: c.user_id.map(|u| u.to_string()),
            client_name: c.client_name,
            client_email: c.client_email,
            client_phone: c.client_phone,
            project_type: c.project_type,
            description: c.description,
            preferred_date: c.preferred_date,
            status: c.status,
            notes: c.notes,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_request_accepts_minimal_body() {
        let json = r#"{"clientName":"Layla","clientEmail":"layla@example.com","clientPhone":"0501234567"}"#;
        let req: BookConsultationRequest = serde_json::from_str(json).unwrap();
        let details: BookingDetails = req.into();
        assert_eq!(details.client_name, "Layla");
        assert!(details.project_type.is_none());
    }

    #[test]
    fn status_request_uses_snake_case_status() {
        let req: UpdateStatusRequest =
            serde_json::from_str(r#"{"status":"confirmed","notes":"Call first"}"#).unwrap();
        assert_eq!(req.status, ConsultationStatus::Confirmed);
        assert_eq!(req.notes.as_deref(), Some("Call first"));
    }
}
