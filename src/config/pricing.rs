//! Estimator configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::pricing::{
    AreaPolicy, AreaRange, CalculatorSettings, PricingError, PricingRules, UnknownSelectionPolicy,
    DEFAULT_LABOR_RATE_PER_AREA, DEFAULT_MAX_AREA, DEFAULT_MIN_AREA,
};

#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// YAML rule table; the built-in rate card is used when unset.
    pub rules_path: Option<PathBuf>,

    #[serde(default = "default_labor_rate")]
    pub labor_rate_per_area: f64,

    #[serde(default = "default_min_area")]
    pub min_area: f64,

    #[serde(default = "default_max_area")]
    pub max_area: f64,

    #[serde(default)]
    pub area_policy: AreaPolicy,

    #[serde(default)]
    pub unknown_selection_policy: UnknownSelectionPolicy,
}

impl PricingConfig {
    pub fn settings(&self) -> Result<CalculatorSettings, PricingError> {
        if !self.labor_rate_per_area.is_finite() || self.labor_rate_per_area < 0.0 {
            return Err(PricingError::invalid_input(
                "labor_rate_per_area",
                "must be a non-negative number",
            ));
        }
        Ok(CalculatorSettings {
            labor_rate_per_area: self.labor_rate_per_area,
            area_range: AreaRange::new(self.min_area, self.max_area)?,
            area_policy: self.area_policy,
            unknown_selection: self.unknown_selection_policy,
        })
    }

    pub fn load_rules(&self) -> Result<PricingRules, PricingError> {
        match &self.rules_path {
            Some(path) => PricingRules::from_yaml_file(path),
            None => Ok(PricingRules::standard()),
        }
    }

    /// Checks the numeric settings. The rule file itself is read at startup.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.settings()
            .map(|_| ())
            .map_err(|e| ValidationError::InvalidPricing(e.to_string()))
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            labor_rate_per_area: default_labor_rate(),
            min_area: default_min_area(),
            max_area: default_max_area(),
            area_policy: AreaPolicy::default(),
            unknown_selection_policy: UnknownSelectionPolicy::default(),
        }
    }
}

fn default_labor_rate() -> f64 {
    DEFAULT_LABOR_RATE_PER_AREA
}

fn default_min_area() -> f64 {
    DEFAULT_MIN_AREA
}

fn default_max_area() -> f64 {
    DEFAULT_MAX_AREA
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_calculator_defaults() {
        let settings = PricingConfig::default().settings().unwrap();
        assert_eq!(settings, CalculatorSettings::default());
    }

    #[test]
    fn test_inverted_area_range_is_invalid() {
        let config = PricingConfig {
            min_area: 500.0,
            max_area: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPricing(_))
        ));
    }

    #[test]
    fn test_negative_labor_rate_is_invalid() {
        let config = PricingConfig {
            labor_rate_per_area: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rules_default_to_standard_card() {
        let rules = PricingConfig::default().load_rules().unwrap();
        assert_eq!(rules.project_types().len(), 4);
    }

    #[test]
    fn test_rules_loaded_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "project_types:\n  - {{ id: studio, label: Studio, base_price_per_area: 900 }}\n\
             styles:\n  - {{ id: modern, label: Modern, multiplier: 1.0 }}\n\
             finishing_tiers:\n  - {{ id: basic, label: Basic, cost_per_area: 500 }}"
        )
        .unwrap();

        let config = PricingConfig {
            rules_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let rules = config.load_rules().unwrap();

        assert_eq!(rules.project_types()[0].id, "studio");
    }

    #[test]
    fn test_missing_rules_file_is_an_error() {
        let config = PricingConfig {
            rules_path: Some(PathBuf::from("/nonexistent/rules.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            config.load_rules(),
            Err(PricingError::InvalidRuleTable(_))
        ));
    }
}
