//! Finishing materials offered to clients.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MaterialId, Timestamp, ValidationError};

/// Quality band of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialQuality {
    #[default]
    Standard,
    Premium,
    Luxury,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(default)]
    pub id: MaterialId,
    pub name: String,
    /// Free-form grouping such as `paint`, `flooring` or `lighting`.
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_unit: f64,
    pub unit: String,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub quality: MaterialQuality,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub created_at: Timestamp,
}

fn default_available() -> bool {
    true
}

impl Material {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::empty_field("category"));
        }
        if self.unit.trim().is_empty() {
            return Err(ValidationError::empty_field("unit"));
        }
        if !self.price_per_unit.is_finite() || self.price_per_unit <= 0.0 {
            return Err(ValidationError::invalid_format(
                "price_per_unit",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Case-insensitive category match.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paint() -> Material {
        serde_yaml::from_str(
            "name: Matte emulsion\ncategory: paint\nprice_per_unit: 45.5\nunit: liter\n",
        )
        .unwrap()
    }

    #[test]
    fn seed_defaults_are_applied() {
        let material = paint();
        assert!(material.available);
        assert_eq!(material.quality, MaterialQuality::Standard);
        assert!(material.validate().is_ok());
    }

    #[test]
    fn zero_price_is_rejected() {
        let mut material = paint();
        material.price_per_unit = 0.0;
        assert_eq!(material.validate().unwrap_err().field(), "price_per_unit");
    }

    #[test]
    fn category_match_ignores_case() {
        assert!(paint().in_category("Paint"));
        assert!(!paint().in_category("tiles"));
    }
}
