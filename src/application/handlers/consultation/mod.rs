//! Consultation handlers.
//!
//! ## Commands
//! - Book a consultation
//! - Update a consultation's status (staff)
//!
//! ## Queries
//! - List a user's consultations

mod book_consultation;
mod list_consultations;
mod update_status;

pub use book_consultation::{BookConsultationCommand, BookConsultationHandler};
pub use list_consultations::{ListConsultationsHandler, ListConsultationsQuery};
pub use update_status::{UpdateConsultationStatusCommand, UpdateConsultationStatusHandler};
