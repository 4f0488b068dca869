//! Stored per-area prices for project type and style combinations.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PricingRowId, ValidationError};

/// Published price for one project type in one style.
///
/// Informational only; the estimator computes from the rule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRow {
    #[serde(default)]
    pub id: PricingRowId,
    pub project_type: String,
    pub style: String,
    pub base_price_per_m2: f64,
    #[serde(default)]
    pub labor_cost_per_m2: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl PricingRow {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_type.trim().is_empty() {
            return Err(ValidationError::empty_field("project_type"));
        }
        if self.style.trim().is_empty() {
            return Err(ValidationError::empty_field("style"));
        }
        if !self.base_price_per_m2.is_finite() || self.base_price_per_m2 <= 0.0 {
            return Err(ValidationError::invalid_format(
                "base_price_per_m2",
                "must be greater than zero",
            ));
        }
        if let Some(labor) = self.labor_cost_per_m2 {
            if !labor.is_finite() || labor < 0.0 {
                return Err(ValidationError::invalid_format(
                    "labor_cost_per_m2",
                    "must not be negative",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_labor_cost_is_rejected() {
        let row = PricingRow {
            id: PricingRowId::new(),
            project_type: "villa".into(),
            style: "classic".into(),
            base_price_per_m2: 2400.0,
            labor_cost_per_m2: Some(-5.0),
            description: None,
        };
        assert_eq!(row.validate().unwrap_err().field(), "labor_cost_per_m2");
    }
}
