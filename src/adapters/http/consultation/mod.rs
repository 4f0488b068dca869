//! HTTP adapter for consultation booking.

mod dto;
mod handlers;
mod routes;

pub use dto::{BookConsultationRequest, ConsultationResponse, UpdateStatusRequest};
pub use handlers::ConsultationHandlers;
pub use routes::consultation_routes;
