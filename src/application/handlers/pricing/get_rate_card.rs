//! GetRateCardHandler - Query handler exposing the rule tables.

use std::sync::Arc;

use crate::domain::pricing::{
    AreaPolicy, EstimateCalculator, FinishingTier, ProjectTypeRate, StyleMultiplier,
};

#[derive(Debug, Clone, Default)]
pub struct GetRateCardQuery;

/// Everything the estimator form needs to render its choices.
#[derive(Debug, Clone)]
pub struct RateCard {
    pub project_types: Vec<ProjectTypeRate>,
    pub styles: Vec<StyleMultiplier>,
    pub finishing_tiers: Vec<FinishingTier>,
    pub labor_rate_per_area: f64,
    pub min_area: f64,
    pub max_area: f64,
    pub area_policy: AreaPolicy,
}

pub struct GetRateCardHandler {
    calculator: Arc<EstimateCalculator>,
}

impl GetRateCardHandler {
    pub fn new(calculator: Arc<EstimateCalculator>) -> Self {
        Self { calculator }
    }

    pub fn handle(&self, _query: GetRateCardQuery) -> RateCard {
        let rules = self.calculator.rules();
        let settings = self.calculator.settings();
        RateCard {
            project_types: rules.project_types().to_vec(),
            styles: rules.styles().to_vec(),
            finishing_tiers: rules.finishing_tiers().to_vec(),
            labor_rate_per_area: settings.labor_rate_per_area,
            min_area: settings.area_range.min(),
            max_area: settings.area_range.max(),
            area_policy: settings.area_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_card_mirrors_calculator_configuration() {
        let handler = GetRateCardHandler::new(Arc::new(EstimateCalculator::standard()));

        let card = handler.handle(GetRateCardQuery);

        assert_eq!(card.project_types.len(), 4);
        assert_eq!(card.styles[0].id, "modern");
        assert_eq!(card.finishing_tiers[3].cost_per_area, 1800.0);
        assert_eq!(card.labor_rate_per_area, 300.0);
        assert_eq!((card.min_area, card.max_area), (50.0, 1000.0));
        assert_eq!(card.area_policy, AreaPolicy::Reject);
    }
}
