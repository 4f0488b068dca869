//! Consultation aggregate.
//!
//! A consultation is a request by a prospective client to meet a designer.
//! Bookings may be anonymous; the owning user is attached when the visitor
//! is signed in.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConsultationId, StateMachine, Timestamp, UserId, ValidationError};

use super::{ConsultationError, ConsultationStatus};

/// Contact and project details supplied with a booking.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookingDetails {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub project_type: Option<String>,
    pub description: Option<String>,
    pub preferred_date: Option<Timestamp>,
}

impl BookingDetails {
    /// Trims contact fields and checks they are usable.
    fn normalized(self) -> Result<Self, ValidationError> {
        let client_name = required("client_name", self.client_name)?;
        let client_phone = required("client_phone", self.client_phone)?;
        let client_email = required("client_email", self.client_email)?;
        validate_email(&client_email)?;

        Ok(Self {
            client_name,
            client_email,
            client_phone,
            project_type: optional(self.project_type),
            description: optional(self.description),
            preferred_date: self.preferred_date,
        })
    }
}

/// Consultation aggregate.
///
/// # Invariants
///
/// - contact name, phone and email are non-empty; email has a plausible shape
/// - status only moves along [`ConsultationStatus`] transitions
/// - `updated_at` is never before `created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: ConsultationId,
    pub user_id: Option<UserId>,
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

impl Consultation {
    /// Books a new consultation in `Pending` status.
    pub fn book(details: BookingDetails, user_id: Option<UserId>) -> Result<Self, ValidationError> {
        let details = details.normalized()?;
        let now = Timestamp::now();
        Ok(Self {
            id: ConsultationId::new(),
            user_id,
            client_name: details.client_name,
            client_email: details.client_email,
            client_phone: details.client_phone,
            project_type: details.project_type,
            description: details.description,
            preferred_date: details.preferred_date,
            status: ConsultationStatus::Pending,
            notes: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn belongs_to(&self, user_id: &UserId) -> bool {
        self.user_id.as_ref() == Some(user_id)
    }

    /// Moves the consultation to `target`, optionally recording staff notes.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` if the status machine forbids the move.
    pub fn change_status(
        &mut self,
        target: ConsultationStatus,
        notes: Option<String>,
    ) -> Result<(), ConsultationError> {
        let from = self.status;
        self.status = from
            .transition_to(target)
            .map_err(|_| ConsultationError::InvalidTransition { from, to: target })?;
        if let Some(notes) = optional(notes) {
            self.notes = Some(notes);
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

fn required(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = |reason: &str| Err(ValidationError::invalid_format("client_email", reason));

    if email.chars().any(char::is_whitespace) {
        return invalid("must not contain whitespace");
    }
    let Some((local, domain)) = email.split_once('@') else {
        return invalid("missing '@'");
    };
    if local.is_empty() || domain.contains('@') {
        return invalid("must contain exactly one '@' after a local part");
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return invalid("domain must look like example.com");
    }
    Ok(())
}
