//! ComputeEstimateHandler - Query handler for cost estimates.

use std::sync::Arc;

use crate::domain::pricing::{Estimate, EstimateCalculator, EstimateRequest, PricingError};

/// Query to price one estimator selection.
#[derive(Debug, Clone)]
pub struct ComputeEstimateQuery {
    pub request: EstimateRequest,
}

/// Handler for estimate queries.
///
/// Pure computation over the shared calculator; substitutions and clamping
/// are logged so unexpected client ids show up in the logs.
pub struct ComputeEstimateHandler {
    calculator: Arc<EstimateCalculator>,
}

impl ComputeEstimateHandler {
    pub fn new(calculator: Arc<EstimateCalculator>) -> Self {
        Self { calculator }
    }

    pub fn handle(&self, query: ComputeEstimateQuery) -> Result<Estimate, PricingError> {
        let estimate = self.calculator.estimate(&query.request).map_err(|err| {
            tracing::debug!(error = %err, "Estimate rejected");
            err
        })?;

        for selection in estimate.defaulted_selections() {
            tracing::warn!(
                kind = %selection.kind,
                requested = %selection.requested_id,
                resolved = %selection.resolved_id,
                "Unknown selection fell back to default"
            );
        }
        if estimate.area_clamped {
            tracing::info!(
                requested = query.request.area_square_meters,
                used = estimate.area_square_meters,
                "Area clamped into permitted range"
            );
        }

        Ok(estimate)
    }
}
