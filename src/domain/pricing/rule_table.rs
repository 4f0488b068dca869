//! Pricing rule table - the read-only catalog of rates.
//!
//! Lookups are explicit: `project_type`, `style` and `finishing_tier` return
//! `None` on a miss, while the `resolve_*` variants tag the result as
//! [`Resolved::Found`] or [`Resolved::Defaulted`] (first table entry) and
//! leave the policy to the caller.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::PricingError;
use super::rates::{FinishingTier, ProjectTypeRate, RateRecord, StyleMultiplier};

/// Outcome of a rate lookup that substitutes the table default on a miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a, T> {
    /// The requested id was present.
    Found(&'a T),
    /// The requested id was absent; the first entry of the table was used.
    Defaulted(&'a T),
}

impl<'a, T> Resolved<'a, T> {
    /// The rate record, regardless of how it was obtained.
    pub fn rate(&self) -> &'a T {
        match self {
            Resolved::Found(rate) | Resolved::Defaulted(rate) => rate,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Resolved::Defaulted(_))
    }
}

/// Immutable pricing configuration injected into the estimate calculator.
///
/// Invariants (checked by [`PricingRules::new`]):
/// - every table has at least one entry
/// - ids are non-empty and unique within their table
/// - every coefficient is finite and strictly positive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingRules {
    project_types: Vec<ProjectTypeRate>,
    styles: Vec<StyleMultiplier>,
    finishing_tiers: Vec<FinishingTier>,
}

/// On-disk shape of a rule table file.
#[derive(Debug, Deserialize)]
struct RuleTableFile {
    project_types: Vec<ProjectTypeRate>,
    styles: Vec<StyleMultiplier>,
    finishing_tiers: Vec<FinishingTier>,
}

impl PricingRules {
    /// Builds a validated rule table.
    pub fn new(
        project_types: Vec<ProjectTypeRate>,
        styles: Vec<StyleMultiplier>,
        finishing_tiers: Vec<FinishingTier>,
    ) -> Result<Self, PricingError> {
        validate_table("project_types", &project_types)?;
        validate_table("styles", &styles)?;
        validate_table("finishing_tiers", &finishing_tiers)?;

        Ok(Self {
            project_types,
            styles,
            finishing_tiers,
        })
    }

    /// The studio's published rate card.
    pub fn standard() -> Self {
        Self {
            project_types: vec![
                ProjectTypeRate::new("apartment", "شقة سكنية", 1500.0),
                ProjectTypeRate::new("villa", "فيلا", 2000.0),
                ProjectTypeRate::new("commercial", "مساحة تجارية", 1800.0),
                ProjectTypeRate::new("office", "مكتب", 1600.0),
            ],
            styles: vec![
                StyleMultiplier::new("modern", "حديث", 1.0),
                StyleMultiplier::new("classic", "كلاسيكي", 1.2),
                StyleMultiplier::new("minimalist", "بسيط", 0.9),
                StyleMultiplier::new("luxury", "فاخر", 1.5),
            ],
            finishing_tiers: vec![
                FinishingTier::new("basic", "أساسي", 500.0),
                FinishingTier::new("standard", "عادي", 800.0),
                FinishingTier::new("premium", "ممتاز", 1200.0),
                FinishingTier::new("luxury", "فاخر", 1800.0),
            ],
        }
    }

    /// Parses and validates a rule table from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PricingError> {
        let file: RuleTableFile = serde_yaml::from_str(yaml)
            .map_err(|e| PricingError::invalid_rule_table(format!("malformed YAML: {}", e)))?;
        Self::new(file.project_types, file.styles, file.finishing_tiers)
    }

    /// Reads a rule table from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, PricingError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PricingError::invalid_rule_table(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&contents)
    }

    pub fn project_types(&self) -> &[ProjectTypeRate] {
        &self.project_types
    }

    pub fn styles(&self) -> &[StyleMultiplier] {
        &self.styles
    }

    pub fn finishing_tiers(&self) -> &[FinishingTier] {
        &self.finishing_tiers
    }

    pub fn project_type(&self, id: &str) -> Option<&ProjectTypeRate> {
        find(&self.project_types, id)
    }

    pub fn style(&self, id: &str) -> Option<&StyleMultiplier> {
        find(&self.styles, id)
    }

    pub fn finishing_tier(&self, id: &str) -> Option<&FinishingTier> {
        find(&self.finishing_tiers, id)
    }

    pub fn resolve_project_type(&self, id: &str) -> Resolved<'_, ProjectTypeRate> {
        resolve(&self.project_types, id)
    }

    pub fn resolve_style(&self, id: &str) -> Resolved<'_, StyleMultiplier> {
        resolve(&self.styles, id)
    }

    pub fn resolve_finishing_tier(&self, id: &str) -> Resolved<'_, FinishingTier> {
        resolve(&self.finishing_tiers, id)
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        Self::standard()
    }
}

fn find<'a, T: RateRecord>(table: &'a [T], id: &str) -> Option<&'a T> {
    table.iter().find(|rate| rate.id() == id)
}

// Tables are non-empty by construction, so indexing the first entry is safe.
fn resolve<'a, T: RateRecord>(table: &'a [T], id: &str) -> Resolved<'a, T> {
    match find(table, id) {
        Some(rate) => Resolved::Found(rate),
        None => Resolved::Defaulted(&table[0]),
    }
}

fn validate_table<T: RateRecord>(name: &str, table: &[T]) -> Result<(), PricingError> {
    if table.is_empty() {
        return Err(PricingError::invalid_rule_table(format!(
            "{} must contain at least one entry",
            name
        )));
    }

    let mut seen = HashSet::new();
    for rate in table {
        if rate.id().trim().is_empty() {
            return Err(PricingError::invalid_rule_table(format!(
                "{} contains an entry with an empty id",
                name
            )));
        }
        if !seen.insert(rate.id()) {
            return Err(PricingError::invalid_rule_table(format!(
                "{} contains duplicate id '{}'",
                name,
                rate.id()
            )));
        }
        let value = rate.coefficient();
        if !value.is_finite() || value <= 0.0 {
            return Err(PricingError::invalid_rule_table(format!(
                "{}.{} of '{}' must be a positive number, got {}",
                name,
                T::coefficient_name(),
                rate.id(),
                value
            )));
        }
    }
    Ok(())
}
