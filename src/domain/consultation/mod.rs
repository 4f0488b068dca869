//! Consultation domain - booking requests and their lifecycle.

mod aggregate;
mod errors;
mod status;

pub use aggregate::{BookingDetails, Consultation};
pub use errors::ConsultationError;
pub use status::ConsultationStatus;
