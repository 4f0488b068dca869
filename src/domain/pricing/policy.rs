//! Input policies applied by the estimate calculator.

use serde::{Deserialize, Serialize};

use super::errors::PricingError;

/// Slider bounds used by the estimator form.
pub const DEFAULT_MIN_AREA: f64 = 50.0;
pub const DEFAULT_MAX_AREA: f64 = 1000.0;

/// What to do with an area that is positive but outside the permitted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaPolicy {
    /// Fail with `InvalidInput`.
    #[default]
    Reject,
    /// Pull the area onto the nearest bound.
    Clamp,
}

/// What to do when a selection id is not in its rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSelectionPolicy {
    /// Use the first entry of the table and report the substitution.
    #[default]
    Fallback,
    /// Fail with `UnknownSelection`.
    Reject,
}

/// Inclusive area range in square meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAreaRange")]
pub struct AreaRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawAreaRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawAreaRange> for AreaRange {
    type Error = PricingError;

    fn try_from(raw: RawAreaRange) -> Result<Self, Self::Error> {
        AreaRange::new(raw.min, raw.max)
    }
}

impl AreaRange {
    /// Creates a range, requiring `0 < min <= max` and finite bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, PricingError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PricingError::invalid_input("area_range", "bounds must be finite"));
        }
        if min <= 0.0 {
            return Err(PricingError::invalid_input(
                "area_range",
                "minimum must be greater than zero",
            ));
        }
        if min > max {
            return Err(PricingError::invalid_input(
                "area_range",
                format!("minimum {} exceeds maximum {}", min, max),
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, area: f64) -> bool {
        area >= self.min && area <= self.max
    }

    pub fn clamp(&self, area: f64) -> f64 {
        area.clamp(self.min, self.max)
    }
}

impl Default for AreaRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_AREA,
            max: DEFAULT_MAX_AREA,
        }
    }
}
