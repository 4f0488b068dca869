//! Estimate calculator - pure derivation of a cost breakdown.
//!
//! ```text
//! base_cost        = base_price_per_area × area
//! style_adjustment = base_cost × (multiplier − 1)
//! finishing_cost   = cost_per_area × area
//! labor_cost       = labor_rate_per_area × area
//! total_cost       = base_cost + style_adjustment + finishing_cost + labor_cost
//! cost_per_area    = total_cost / area
//! ```
//!
//! Full precision is kept on every component; [`EstimateBreakdown::rounded`]
//! produces the two-decimal values shown to visitors.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::errors::{PricingError, SelectionKind};
use super::policy::{AreaPolicy, AreaRange, UnknownSelectionPolicy};
use super::rates::RateRecord;
use super::rule_table::{PricingRules, Resolved};

/// Labor cost per square meter charged on every project.
pub const DEFAULT_LABOR_RATE_PER_AREA: f64 = 300.0;

/// Selections and area chosen in the estimator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub project_type_id: String,
    pub style_id: String,
    pub finishing_tier_id: String,
    pub area_square_meters: f64,
}

impl EstimateRequest {
    pub fn new(
        project_type_id: impl Into<String>,
        style_id: impl Into<String>,
        finishing_tier_id: impl Into<String>,
        area_square_meters: f64,
    ) -> Self {
        Self {
            project_type_id: project_type_id.into(),
            style_id: style_id.into(),
            finishing_tier_id: finishing_tier_id.into(),
            area_square_meters,
        }
    }
}

/// Derived cost components. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateBreakdown {
    pub base_cost: f64,
    pub style_adjustment: f64,
    pub finishing_cost: f64,
    pub labor_cost: f64,
    pub total_cost: f64,
    pub cost_per_area: f64,
}

impl EstimateBreakdown {
    /// Applies the linear pricing formula to already-resolved rates.
    ///
    /// Callers must pass a finite area greater than zero.
    pub fn from_rates(
        base_price_per_area: f64,
        multiplier: f64,
        finishing_cost_per_area: f64,
        labor_rate_per_area: f64,
        area: f64,
    ) -> Self {
        let base_cost = base_price_per_area * area;
        let style_adjustment = base_cost * (multiplier - 1.0);
        let finishing_cost = finishing_cost_per_area * area;
        let labor_cost = labor_rate_per_area * area;
        let total_cost = base_cost + style_adjustment + finishing_cost + labor_cost;

        Self {
            base_cost,
            style_adjustment,
            finishing_cost,
            labor_cost,
            total_cost,
            cost_per_area: total_cost / area,
        }
    }

    /// Copy of the breakdown with every value rounded to two decimals.
    pub fn rounded(&self) -> Self {
        Self {
            base_cost: round_currency(self.base_cost),
            style_adjustment: round_currency(self.style_adjustment),
            finishing_cost: round_currency(self.finishing_cost),
            labor_cost: round_currency(self.labor_cost),
            total_cost: round_currency(self.total_cost),
            cost_per_area: round_currency(self.cost_per_area),
        }
    }
}

/// Rounds a currency amount to two decimal places (half away from zero).
pub fn round_currency(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Normalise -0.0 so it never renders as "-0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// How one selection was resolved against its table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSelection {
    pub kind: SelectionKind,
    pub requested_id: String,
    pub resolved_id: String,
    pub defaulted: bool,
}

/// A breakdown together with the inputs that actually produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub breakdown: EstimateBreakdown,
    /// Area used in the computation (after clamping, if the policy clamps).
    pub area_square_meters: f64,
    pub area_clamped: bool,
    pub project_type: ResolvedSelection,
    pub style: ResolvedSelection,
    pub finishing_tier: ResolvedSelection,
}

impl Estimate {
    /// Selections that fell back to their table default.
    pub fn defaulted_selections(&self) -> Vec<&ResolvedSelection> {
        [&self.project_type, &self.style, &self.finishing_tier]
            .into_iter()
            .filter(|s| s.defaulted)
            .collect()
    }
}

/// Tunables of the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorSettings {
    pub labor_rate_per_area: f64,
    pub area_range: AreaRange,
    pub area_policy: AreaPolicy,
    pub unknown_selection: UnknownSelectionPolicy,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            labor_rate_per_area: DEFAULT_LABOR_RATE_PER_AREA,
            area_range: AreaRange::default(),
            area_policy: AreaPolicy::Reject,
            unknown_selection: UnknownSelectionPolicy::Fallback,
        }
    }
}

/// Stateless estimate calculator over an injected rule table.
#[derive(Debug, Clone)]
pub struct EstimateCalculator {
    rules: Arc<PricingRules>,
    settings: CalculatorSettings,
}

impl EstimateCalculator {
    pub fn new(rules: Arc<PricingRules>, settings: CalculatorSettings) -> Result<Self, PricingError> {
        validate_labor_rate(settings.labor_rate_per_area)?;
        Ok(Self { rules, settings })
    }

    /// Calculator over the standard rate card with default settings.
    pub fn standard() -> Self {
        Self {
            rules: Arc::new(PricingRules::standard()),
            settings: CalculatorSettings::default(),
        }
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Computes a breakdown with an explicit labor rate.
    pub fn compute_estimate(
        &self,
        request: &EstimateRequest,
        labor_rate_per_area: f64,
    ) -> Result<EstimateBreakdown, PricingError> {
        self.estimate_with_labor_rate(request, labor_rate_per_area)
            .map(|estimate| estimate.breakdown)
    }

    /// Computes a full estimate using the configured labor rate.
    pub fn estimate(&self, request: &EstimateRequest) -> Result<Estimate, PricingError> {
        self.estimate_with_labor_rate(request, self.settings.labor_rate_per_area)
    }

    fn estimate_with_labor_rate(
        &self,
        request: &EstimateRequest,
        labor_rate_per_area: f64,
    ) -> Result<Estimate, PricingError> {
        validate_labor_rate(labor_rate_per_area)?;
        let (area, area_clamped) = self.effective_area(request.area_square_meters)?;

        let project_type = self.apply_policy(
            SelectionKind::ProjectType,
            &request.project_type_id,
            self.rules.resolve_project_type(&request.project_type_id),
        )?;
        let style = self.apply_policy(
            SelectionKind::Style,
            &request.style_id,
            self.rules.resolve_style(&request.style_id),
        )?;
        let finishing = self.apply_policy(
            SelectionKind::FinishingTier,
            &request.finishing_tier_id,
            self.rules.resolve_finishing_tier(&request.finishing_tier_id),
        )?;

        let breakdown = EstimateBreakdown::from_rates(
            project_type.0.base_price_per_area,
            style.0.multiplier,
            finishing.0.cost_per_area,
            labor_rate_per_area,
            area,
        );

        Ok(Estimate {
            breakdown,
            area_square_meters: area,
            area_clamped,
            project_type: project_type.1,
            style: style.1,
            finishing_tier: finishing.1,
        })
    }

    fn effective_area(&self, area: f64) -> Result<(f64, bool), PricingError> {
        if !area.is_finite() {
            return Err(PricingError::invalid_input(
                "area_square_meters",
                "must be a finite number",
            ));
        }
        if area <= 0.0 {
            return Err(PricingError::invalid_input(
                "area_square_meters",
                "must be greater than zero",
            ));
        }

        let range = self.settings.area_range;
        if range.contains(area) {
            return Ok((area, false));
        }
        match self.settings.area_policy {
            AreaPolicy::Clamp => Ok((range.clamp(area), true)),
            AreaPolicy::Reject => Err(PricingError::invalid_input(
                "area_square_meters",
                format!("must be between {} and {}", range.min(), range.max()),
            )),
        }
    }

    fn apply_policy<'a, T: RateRecord>(
        &self,
        kind: SelectionKind,
        requested_id: &str,
        resolved: Resolved<'a, T>,
    ) -> Result<(&'a T, ResolvedSelection), PricingError> {
        if resolved.is_defaulted()
            && self.settings.unknown_selection == UnknownSelectionPolicy::Reject
        {
            return Err(PricingError::unknown_selection(kind, requested_id));
        }

        let rate = resolved.rate();
        let selection = ResolvedSelection {
            kind,
            requested_id: requested_id.to_string(),
            resolved_id: rate.id().to_string(),
            defaulted: resolved.is_defaulted(),
        };
        Ok((rate, selection))
    }
}

fn validate_labor_rate(rate: f64) -> Result<(), PricingError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(PricingError::invalid_input(
            "labor_rate_per_area",
            "must be a non-negative number",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::{FinishingTier, ProjectTypeRate, StyleMultiplier};
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-6;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn wide_calculator() -> EstimateCalculator {
        EstimateCalculator::new(
            Arc::new(PricingRules::standard()),
            CalculatorSettings {
                area_range: AreaRange::new(0.01, 1_000_000.0).unwrap(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn with_policy(area_policy: AreaPolicy, unknown: UnknownSelectionPolicy) -> EstimateCalculator {
        EstimateCalculator::new(
            Arc::new(PricingRules::standard()),
            CalculatorSettings {
                area_policy,
                unknown_selection: unknown,
                ..Default::default()
            },
        )
        .unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Worked examples
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn apartment_modern_standard_hundred_square_meters() {
        let calc = EstimateCalculator::standard();
        let request = EstimateRequest::new("apartment", "modern", "standard", 100.0);

        let breakdown = calc.compute_estimate(&request, 300.0).unwrap();

        assert_close(breakdown.base_cost, 150_000.0);
        assert_close(breakdown.style_adjustment, 0.0);
        assert_close(breakdown.finishing_cost, 80_000.0);
        assert_close(breakdown.labor_cost, 30_000.0);
        assert_close(breakdown.total_cost, 260_000.0);
        assert_close(breakdown.cost_per_area, 2_600.0);
    }

    #[test]
    fn luxury_style_adds_half_the_base_cost() {
        let calc = EstimateCalculator::standard();
        let request = EstimateRequest::new("apartment", "luxury", "standard", 100.0);

        let breakdown = calc.compute_estimate(&request, 300.0).unwrap();

        assert_close(breakdown.style_adjustment, 75_000.0);
        assert_close(breakdown.total_cost, 335_000.0);
    }

    #[test]
    fn minimalist_style_produces_negative_adjustment() {
        let calc = EstimateCalculator::standard();
        let request = EstimateRequest::new("villa", "minimalist", "basic", 200.0);

        let breakdown = calc.compute_estimate(&request, 300.0).unwrap();

        // 2000 × 200 = 400000; × (0.9 − 1) = −40000
        assert_close(breakdown.style_adjustment, -40_000.0);
        assert_close(breakdown.total_cost, 400_000.0 - 40_000.0 + 100_000.0 + 60_000.0);
    }

    #[test]
    fn estimate_uses_configured_labor_rate() {
        let calc = EstimateCalculator::standard();
        let estimate = calc
            .estimate(&EstimateRequest::new("office", "classic", "premium", 80.0))
            .unwrap();

        assert_close(estimate.breakdown.labor_cost, 80.0 * DEFAULT_LABOR_RATE_PER_AREA);
        assert!(estimate.defaulted_selections().is_empty());
        assert!(!estimate.area_clamped);
    }

    // ───────────────────────────────────────────────────────────────
    // Area policy
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn zero_area_is_invalid_input() {
        let calc = EstimateCalculator::standard();
        let result = calc.compute_estimate(
            &EstimateRequest::new("apartment", "modern", "standard", 0.0),
            300.0,
        );
        assert!(matches!(result, Err(PricingError::InvalidInput { .. })));
    }

    #[test]
    fn zero_area_is_invalid_even_when_clamping() {
        let calc = with_policy(AreaPolicy::Clamp, UnknownSelectionPolicy::Fallback);
        let result = calc.estimate(&EstimateRequest::new("apartment", "modern", "standard", 0.0));
        assert!(matches!(result, Err(PricingError::InvalidInput { .. })));
    }

    #[test]
    fn negative_and_nan_areas_are_invalid_input() {
        let calc = EstimateCalculator::standard();
        for area in [-10.0, f64::NAN, f64::INFINITY] {
            let result = calc.estimate(&EstimateRequest::new("apartment", "modern", "standard", area));
            assert!(
                matches!(result, Err(PricingError::InvalidInput { ref field, .. }) if field == "area_square_meters"),
                "area {} should be rejected",
                area
            );
        }
    }

    #[test]
    fn out_of_range_area_is_rejected_by_default() {
        let calc = EstimateCalculator::standard();
        let result = calc.estimate(&EstimateRequest::new("apartment", "modern", "standard", 20.0));
        match result {
            Err(PricingError::InvalidInput { reason, .. }) => {
                assert_eq!(reason, "must be between 50 and 1000")
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_area_is_clamped_when_configured() {
        let calc = with_policy(AreaPolicy::Clamp, UnknownSelectionPolicy::Fallback);
        let estimate = calc
            .estimate(&EstimateRequest::new("apartment", "modern", "standard", 5_000.0))
            .unwrap();

        assert!(estimate.area_clamped);
        assert_close(estimate.area_square_meters, 1_000.0);
        assert_close(estimate.breakdown.base_cost, 1_500_000.0);
    }

    #[test]
    fn negative_labor_rate_is_invalid_input() {
        let calc = EstimateCalculator::standard();
        let result = calc.compute_estimate(
            &EstimateRequest::new("apartment", "modern", "standard", 100.0),
            -1.0,
        );
        assert!(matches!(result, Err(PricingError::InvalidInput { ref field, .. }) if field == "labor_rate_per_area"));
    }

    #[test]
    fn calculator_rejects_invalid_configured_labor_rate() {
        let result = EstimateCalculator::new(
            Arc::new(PricingRules::standard()),
            CalculatorSettings {
                labor_rate_per_area: f64::NAN,
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }

    // ───────────────────────────────────────────────────────────────
    // Unknown selection policy
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn unknown_ids_fall_back_to_first_entries() {
        let calc = EstimateCalculator::standard();
        let estimate = calc
            .estimate(&EstimateRequest::new("castle", "gothic", "gold", 100.0))
            .unwrap();

        assert_eq!(estimate.project_type.resolved_id, "apartment");
        assert_eq!(estimate.style.resolved_id, "modern");
        assert_eq!(estimate.finishing_tier.resolved_id, "basic");
        assert_eq!(estimate.defaulted_selections().len(), 3);
        assert_close(estimate.breakdown.base_cost, 150_000.0);
        assert_close(estimate.breakdown.finishing_cost, 50_000.0);
    }

    #[test]
    fn unknown_ids_are_rejected_under_strict_policy() {
        let calc = with_policy(AreaPolicy::Reject, UnknownSelectionPolicy::Reject);
        let result = calc.estimate(&EstimateRequest::new("apartment", "gothic", "standard", 100.0));
        assert_eq!(
            result.unwrap_err(),
            PricingError::unknown_selection(SelectionKind::Style, "gothic")
        );
    }

    #[test]
    fn injected_rule_table_drives_the_result() {
        let rules = PricingRules::new(
            vec![ProjectTypeRate::new("kiosk", "", 900.0)],
            vec![StyleMultiplier::new("pop", "", 1.1)],
            vec![FinishingTier::new("raw", "", 100.0)],
        )
        .unwrap();
        let calc = EstimateCalculator::new(Arc::new(rules), CalculatorSettings::default()).unwrap();

        let breakdown = calc
            .compute_estimate(&EstimateRequest::new("kiosk", "pop", "raw", 50.0), 0.0)
            .unwrap();

        assert_close(breakdown.base_cost, 45_000.0);
        assert_close(breakdown.style_adjustment, 4_500.0);
        assert_close(breakdown.labor_cost, 0.0);
        assert_close(breakdown.total_cost, 45_000.0 + 4_500.0 + 5_000.0);
    }

    // ───────────────────────────────────────────────────────────────
    // Rounding
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn rounded_breakdown_keeps_two_decimals() {
        let breakdown = EstimateBreakdown::from_rates(1500.0, 1.2, 800.0, 300.0, 123.456);
        let rounded = breakdown.rounded();

        assert_eq!(rounded.base_cost, 185_184.0);
        assert_eq!(rounded.finishing_cost, 98_764.8);
        assert_eq!(rounded.labor_cost, 37_036.8);
        assert!((breakdown.base_cost - rounded.base_cost).abs() < 0.005);
    }

    #[test]
    fn round_currency_normalises_negative_zero() {
        assert_eq!(round_currency(-0.001).to_string(), "0");
        assert_eq!(round_currency(2.675_1), 2.68);
        assert_eq!(round_currency(-15.555_5), -15.56);
    }

    // ───────────────────────────────────────────────────────────────
    // Properties
    // ───────────────────────────────────────────────────────────────

    fn selection_ids() -> impl Strategy<Value = (String, String, String)> {
        (
            prop::sample::select(vec!["apartment", "villa", "commercial", "office"]),
            prop::sample::select(vec!["modern", "classic", "minimalist", "luxury"]),
            prop::sample::select(vec!["basic", "standard", "premium", "luxury"]),
        )
            .prop_map(|(p, s, f)| (p.to_string(), s.to_string(), f.to_string()))
    }

    proptest! {
        #[test]
        fn total_is_sum_of_components((p, s, f) in selection_ids(), area in 0.01f64..100_000.0, labor in 0.0f64..2_000.0) {
            let calc = wide_calculator();
            let b = calc.compute_estimate(&EstimateRequest::new(p, s, f, area), labor).unwrap();
            let sum = b.base_cost + b.style_adjustment + b.finishing_cost + b.labor_cost;
            prop_assert!((b.total_cost - sum).abs() < TOLERANCE);
            prop_assert!((b.cost_per_area * area - b.total_cost).abs() < 1e-6 * b.total_cost.max(1.0));
        }

        #[test]
        fn total_strictly_increases_with_area((p, s, f) in selection_ids(), area in 0.01f64..10_000.0, delta in 1.0f64..10_000.0) {
            let calc = wide_calculator();
            let smaller = calc.compute_estimate(&EstimateRequest::new(p.clone(), s.clone(), f.clone(), area), 300.0).unwrap();
            let larger = calc.compute_estimate(&EstimateRequest::new(p, s, f, area + delta), 300.0).unwrap();
            prop_assert!(larger.total_cost > smaller.total_cost);
        }

        #[test]
        fn unit_multiplier_gives_zero_adjustment(area in 0.01f64..100_000.0, p in prop::sample::select(vec!["apartment", "villa", "commercial", "office"])) {
            let calc = wide_calculator();
            let b = calc.compute_estimate(&EstimateRequest::new(p, "modern", "standard", area), 300.0).unwrap();
            prop_assert_eq!(b.style_adjustment, 0.0);
        }

        #[test]
        fn identical_input_gives_identical_output((p, s, f) in selection_ids(), area in 50.0f64..1_000.0) {
            let calc = EstimateCalculator::standard();
            let request = EstimateRequest::new(p, s, f, area);
            let first = calc.estimate(&request).unwrap();
            let second = calc.estimate(&request).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn non_negative_inputs_give_non_negative_costs((p, s, f) in selection_ids(), area in 0.01f64..100_000.0) {
            let calc = wide_calculator();
            let b = calc.compute_estimate(&EstimateRequest::new(p, s, f, area), 300.0).unwrap();
            prop_assert!(b.base_cost >= 0.0);
            prop_assert!(b.finishing_cost >= 0.0);
            prop_assert!(b.labor_cost >= 0.0);
            prop_assert!(b.total_cost > 0.0);
        }
    }
}
