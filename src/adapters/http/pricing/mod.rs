//! HTTP adapter for the cost estimator.

mod dto;
mod handlers;
mod routes;

pub use dto::{EstimateRequestDto, EstimateResponse, RateCardResponse};
pub use handlers::PricingHandlers;
pub use routes::pricing_routes;
