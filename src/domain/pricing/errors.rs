//! Pricing error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Which of the three rate tables a selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    ProjectType,
    Style,
    FinishingTier,
}

impl SelectionKind {
    /// Returns the wire name of this selection kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionKind::ProjectType => "project_type",
            SelectionKind::Style => "style",
            SelectionKind::FinishingTier => "finishing_tier",
        }
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the rule table and the estimate calculator.
///
/// The calculator never returns a partial or NaN breakdown: every failure is
/// reported before any arithmetic happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A numeric input is missing, non-finite or outside its permitted range.
    #[error("invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// A selection id is not in its table and the policy forbids falling back.
    #[error("unknown {kind} '{id}'")]
    UnknownSelection { kind: SelectionKind, id: String },

    /// The rate tables themselves are malformed.
    #[error("invalid rule table: {0}")]
    InvalidRuleTable(String),
}

impl PricingError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_selection(kind: SelectionKind, id: impl Into<String>) -> Self {
        PricingError::UnknownSelection {
            kind,
            id: id.into(),
        }
    }

    pub fn invalid_rule_table(reason: impl Into<String>) -> Self {
        PricingError::InvalidRuleTable(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PricingError::InvalidInput { .. } => ErrorCode::ValidationFailed,
            PricingError::UnknownSelection { .. } => ErrorCode::NotFound,
            PricingError::InvalidRuleTable(_) => ErrorCode::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_names_field_and_reason() {
        let err = PricingError::invalid_input("area_square_meters", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid input for 'area_square_meters': must be greater than zero"
        );
    }

    #[test]
    fn unknown_selection_names_kind() {
        let err = PricingError::unknown_selection(SelectionKind::Style, "baroque");
        assert_eq!(err.to_string(), "unknown style 'baroque'");
    }

    #[test]
    fn selection_kind_serializes_snake_case() {
        let json = serde_json::to_string(&SelectionKind::FinishingTier).unwrap();
        assert_eq!(json, "\"finishing_tier\"");
    }
}
