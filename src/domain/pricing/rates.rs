//! Rate records held by the pricing rule table.

use serde::{Deserialize, Serialize};

/// Common accessors shared by the three rate record types.
pub trait RateRecord {
    /// Lookup key of the record.
    fn id(&self) -> &str;

    /// The numeric coefficient carried by the record.
    fn coefficient(&self) -> f64;

    /// Name of the coefficient, used in validation messages.
    fn coefficient_name() -> &'static str;
}

/// Per-area base price of a project type (apartment, villa, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTypeRate {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub base_price_per_area: f64,
}

impl ProjectTypeRate {
    pub fn new(id: impl Into<String>, label: impl Into<String>, base_price_per_area: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            base_price_per_area,
        }
    }
}

impl RateRecord for ProjectTypeRate {
    fn id(&self) -> &str {
        &self.id
    }

    fn coefficient(&self) -> f64 {
        self.base_price_per_area
    }

    fn coefficient_name() -> &'static str {
        "base_price_per_area"
    }
}

/// Coefficient applied to the base cost to reflect the aesthetic tier.
///
/// Typically between 0.9 and 1.5. A multiplier below 1 yields a negative
/// style adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleMultiplier {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub multiplier: f64,
}

impl StyleMultiplier {
    pub fn new(id: impl Into<String>, label: impl Into<String>, multiplier: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            multiplier,
        }
    }
}

impl RateRecord for StyleMultiplier {
    fn id(&self) -> &str {
        &self.id
    }

    fn coefficient(&self) -> f64 {
        self.multiplier
    }

    fn coefficient_name() -> &'static str {
        "multiplier"
    }
}

/// Per-area cost of a finishing quality level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishingTier {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub cost_per_area: f64,
}

impl FinishingTier {
    pub fn new(id: impl Into<String>, label: impl Into<String>, cost_per_area: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            cost_per_area,
        }
    }
}

impl RateRecord for FinishingTier {
    fn id(&self) -> &str {
        &self.id
    }

    fn coefficient(&self) -> f64 {
        self.cost_per_area
    }

    fn coefficient_name() -> &'static str {
        "cost_per_area"
    }
}
