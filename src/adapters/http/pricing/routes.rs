//! HTTP routes for the estimator.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{compute_estimate, get_rates, PricingHandlers};

pub fn pricing_routes(handlers: PricingHandlers) -> Router {
    Router::new()
        .route("/api/pricing/rates", get(get_rates))
        .route("/api/pricing/estimate", post(compute_estimate))
        .with_state(handlers)
}
