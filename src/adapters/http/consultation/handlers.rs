//! HTTP handlers for consultation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::adapters::http::middleware::{OptionalAuth, RequireAdmin, RequireAuth};
use crate::application::handlers::consultation::{
    BookConsultationCommand, BookConsultationHandler, ListConsultationsHandler,
    ListConsultationsQuery, UpdateConsultationStatusCommand, UpdateConsultationStatusHandler,
};
use crate::domain::consultation::ConsultationError;
use crate::domain::foundation::ConsultationId;

use super::dto::{BookConsultationRequest, ConsultationResponse, UpdateStatusRequest};

#[derive(Clone)]
pub struct ConsultationHandlers {
    book_handler: Arc<BookConsultationHandler>,
    list_handler: Arc<ListConsultationsHandler>,
    update_status_handler: Arc<UpdateConsultationStatusHandler>,
}

impl ConsultationHandlers {
    pub fn new(
        book_handler: Arc<BookConsultationHandler>,
        list_handler: Arc<ListConsultationsHandler>,
        update_status_handler: Arc<UpdateConsultationStatusHandler>,
    ) -> Self {
        Self {
            book_handler,
            list_handler,
            update_status_handler,
        }
    }
}

/// POST /api/consultations - Book a consultation (anonymous allowed)
pub async fn book_consultation(
    State(handlers): State<ConsultationHandlers>,
    OptionalAuth(user): OptionalAuth,
    Json(req): Json<BookConsultationRequest>,
) -> Response {
    let cmd = BookConsultationCommand {
        details: req.into(),
        user_id: user.map(|u| u.id),
    };

    match handlers.book_handler.handle(cmd).await {
        Ok(consultation) => (
            StatusCode::CREATED,
            Json(ConsultationResponse::from(consultation)),
        )
            .into_response(),
        Err(e) => handle_consultation_error(e),
    }
}

/// GET /api/consultations - The caller's consultations
pub async fn list_consultations(
    State(handlers): State<ConsultationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListConsultationsQuery { user_id: user.id };

    match handlers.list_handler.handle(query).await {
        Ok(consultations) => {
            let response: Vec<ConsultationResponse> =
                consultations.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_consultation_error(e),
    }
}

/// PATCH /api/consultations/:id/status - Move a consultation (admin)
pub async fn update_consultation_status(
    State(handlers): State<ConsultationHandlers>,
    RequireAdmin(admin): RequireAdmin,
    Path(consultation_id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Response {
    let consultation_id = match consultation_id.parse::<ConsultationId>() {
        Ok(id) => id,
        Err(_) => return ApiError::bad_request("Invalid consultation ID").into_response(),
    };

    let cmd = UpdateConsultationStatusCommand {
        consultation_id,
        status: req.status,
        notes: req.notes,
    };

    match handlers.update_status_handler.handle(cmd).await {
        Ok(consultation) => {
            tracing::debug!(admin = %admin.id, consultation_id = %consultation.id, "Status updated by admin");
            (StatusCode::OK, Json(ConsultationResponse::from(consultation))).into_response()
        }
        Err(e) => handle_consultation_error(e),
    }
}

fn handle_consultation_error(error: ConsultationError) -> Response {
    let code = error.code();
    match error {
        ConsultationError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                code,
                format!("Consultation not found: {}", id),
            )),
        )
            .into_response(),
        ConsultationError::InvalidTransition { from, to } => (
            StatusCode::CONFLICT,
            Json(
                ErrorResponse::new(code, format!("Cannot move consultation from {} to {}", from, to))
                    .with_details(serde_json::json!({ "from": from, "to": to })),
            ),
        )
            .into_response(),
        ConsultationError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorResponse::new(code, format!("Validation failed for {}: {}", field, message))
                    .with_details(serde_json::json!({ "field": field })),
            ),
        )
            .into_response(),
        ConsultationError::Infrastructure(msg) => ApiError::internal(msg).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::consultation::ConsultationStatus;

    #[test]
    fn error_status_codes() {
        let cases = [
            (
                ConsultationError::NotFound(ConsultationId::new()),
                StatusCode::NOT_FOUND,
            ),
            (
                ConsultationError::InvalidTransition {
                    from: ConsultationStatus::Completed,
                    to: ConsultationStatus::Pending,
                },
                StatusCode::CONFLICT,
            ),
            (
                ConsultationError::validation("client_email", "missing '@'"),
                StatusCode::BAD_REQUEST,
            ),
            (
                ConsultationError::infrastructure("disk full"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(handle_consultation_error(error).status(), expected);
        }
    }
}
