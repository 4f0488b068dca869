//! HTTP handlers for the estimator endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::application::handlers::pricing::{
    ComputeEstimateHandler, ComputeEstimateQuery, GetRateCardHandler, GetRateCardQuery,
};
use crate::domain::foundation::ErrorCode;
use crate::domain::pricing::{EstimateRequest, PricingError};

use super::dto::{EstimateRequestDto, EstimateResponse, RateCardResponse};

#[derive(Clone)]
pub struct PricingHandlers {
    estimate_handler: Arc<ComputeEstimateHandler>,
    rate_card_handler: Arc<GetRateCardHandler>,
}

impl PricingHandlers {
    pub fn new(
        estimate_handler: Arc<ComputeEstimateHandler>,
        rate_card_handler: Arc<GetRateCardHandler>,
    ) -> Self {
        Self {
            estimate_handler,
            rate_card_handler,
        }
    }
}

/// GET /api/pricing/rates - Rule tables, labor rate and area bounds
pub async fn get_rates(State(handlers): State<PricingHandlers>) -> Response {
    let card = handlers.rate_card_handler.handle(GetRateCardQuery);
    (StatusCode::OK, Json(RateCardResponse::from(card))).into_response()
}

/// POST /api/pricing/estimate - Compute a cost estimate
pub async fn compute_estimate(
    State(handlers): State<PricingHandlers>,
    body: Result<Json<EstimateRequestDto>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_body_rejection(rejection),
    };
    let request = match EstimateRequest::try_from(req) {
        Ok(request) => request,
        Err(e) => return handle_pricing_error(e),
    };
    let query = ComputeEstimateQuery { request };

    match handlers.estimate_handler.handle(query) {
        Ok(estimate) => (StatusCode::OK, Json(EstimateResponse::from(estimate))).into_response(),
        Err(e) => handle_pricing_error(e),
    }
}

fn handle_body_rejection(rejection: JsonRejection) -> Response {
    let body = ErrorResponse::new(ErrorCode::ValidationFailed, rejection.body_text())
        .with_details(serde_json::json!({ "field": "body" }));
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn handle_pricing_error(error: PricingError) -> Response {
    let code = error.code();
    match error {
        PricingError::InvalidInput { ref field, .. } => {
            let body = ErrorResponse::new(code, error.to_string())
                .with_details(serde_json::json!({ "field": field }));
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        PricingError::UnknownSelection { kind, ref id } => {
            let body = ErrorResponse::new(code, error.to_string())
                .with_details(serde_json::json!({ "kind": kind, "id": id }));
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        PricingError::InvalidRuleTable(_) => ApiError::internal(error).into_response(),
    }
}
