//! Pricing domain - rule table and estimate calculator.
//!
//! The rule table is immutable configuration; the calculator is a pure
//! function of a request, the table and the labor rate. Nothing here performs
//! I/O apart from optionally loading a rule table file at startup.

mod calculator;
mod errors;
mod policy;
mod rates;
mod rule_table;

pub use calculator::{
    round_currency, CalculatorSettings, Estimate, EstimateBreakdown, EstimateCalculator,
    EstimateRequest, ResolvedSelection, DEFAULT_LABOR_RATE_PER_AREA,
};
pub use errors::{PricingError, SelectionKind};
pub use policy::{AreaPolicy, AreaRange, UnknownSelectionPolicy, DEFAULT_MAX_AREA, DEFAULT_MIN_AREA};
pub use rates::{FinishingTier, ProjectTypeRate, RateRecord, StyleMultiplier};
pub use rule_table::{PricingRules, Resolved};
