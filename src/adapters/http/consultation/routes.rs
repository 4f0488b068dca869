//! HTTP routes for consultation endpoints.

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{
    book_consultation, list_consultations, update_consultation_status, ConsultationHandlers,
};

pub fn consultation_routes(handlers: ConsultationHandlers) -> Router {
    Router::new()
        .route(
            "/api/consultations",
            get(list_consultations).post(book_consultation),
        )
        .route(
            "/api/consultations/:id/status",
            patch(update_consultation_status),
        )
        .with_state(handlers)
}
