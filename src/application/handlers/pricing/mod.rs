//! Pricing handlers.
//!
//! ## Queries
//! - Compute a cost estimate
//! - Read the rate card

mod compute_estimate;
mod get_rate_card;

pub use compute_estimate::{ComputeEstimateHandler, ComputeEstimateQuery};
pub use get_rate_card::{GetRateCardHandler, GetRateCardQuery, RateCard};
