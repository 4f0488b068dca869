//! DTOs for the estimator endpoints.
//!
//! The estimator form speaks camelCase.

use serde::{Deserialize, Serialize};

use crate::application::handlers::pricing::RateCard;
use crate::domain::catalog::CURRENCY;
use crate::domain::pricing::{AreaPolicy, Estimate, EstimateRequest, PricingError};

/// Estimator form body. The area is kept as raw JSON so a non-numeric
/// value is reported like any other invalid area.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequestDto {
    pub project_type_id: String,
    pub style_id: String,
    pub finishing_tier_id: String,
    pub area_square_meters: serde_json::Value,
}

impl TryFrom<EstimateRequestDto> for EstimateRequest {
    type Error = PricingError;

    fn try_from(dto: EstimateRequestDto) -> Result<Self, Self::Error> {
        let area = dto
            .area_square_meters
            .as_f64()
            .ok_or_else(|| PricingError::invalid_input("area_square_meters", "must be a number"))?;
        Ok(EstimateRequest::new(
            dto.project_type_id,
            dto.style_id,
            dto.finishing_tier_id,
            area,
        ))
    }
}

/// Rounded breakdown plus the inputs that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub base_cost: f64,
    pub style_adjustment: f64,
    pub finishing_cost: f64,
    pub labor_cost: f64,
    pub total_cost: f64,
    pub cost_per_area: f64,
    pub currency: String,
    pub area_square_meters: f64,
    pub area_clamped: bool,
    pub project_type_id: String,
    pub style_id: String,
    pub finishing_tier_id: String,
    /// Selections replaced by their table default (`project_type`, `style`, `finishing_tier`).
    pub defaulted: Vec<String>,
}

impl From<Estimate> for EstimateResponse {
    fn from(estimate: Estimate) -> Self {
        let rounded = estimate.breakdown.rounded();
        let defaulted = estimate
            .defaulted_selections()
            .into_iter()
            .map(|s| s.kind.as_str().to_string())
            .collect();
        Self {
            base_cost: rounded.base_cost,
            style_adjustment: rounded.style_adjustment,
            finishing_cost: rounded.finishing_cost,
            labor_cost: rounded.labor_cost,
            total_cost: rounded.total_cost,
            cost_per_area: rounded.cost_per_area,
            currency: CURRENCY.to_string(),
            area_square_meters: estimate.area_square_meters,
            area_clamped: estimate.area_clamped,
            project_type_id: estimate.project_type.resolved_id,
            style_id: estimate.style.resolved_id,
            finishing_tier_id: estimate.finishing_tier.resolved_id,
            defaulted,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTypeDto {
    pub id: String,
    pub label: String,
    pub base_price_per_area: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDto {
    pub id: String,
    pub label: String,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishingTierDto {
    pub id: String,
    pub label: String,
    pub cost_per_area: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCardResponse {
    pub project_types: Vec<ProjectTypeDto>,
    pub styles: Vec<StyleDto>,
    pub finishing_tiers: Vec<FinishingTierDto>,
    pub labor_rate_per_area: f64,
    pub min_area: f64,
    pub max_area: f64,
    pub area_policy: AreaPolicy,
    pub currency: &'static str,
}

impl From<RateCard> for RateCardResponse {
    fn from(card: RateCard) -> Self {
        Self {
            project_types: card
                .project_types
                .into_iter()
                .map(|p| ProjectTypeDto {
                    id: p.id,
                    label: p.label,
                    base_price_per_area: p.base_price_per_area,
                })
                .collect(),
            styles: card
                .styles
                .into_iter()
                .map(|s| StyleDto {
                    id: s.id,
                    label: s.label,
                    multiplier: s.multiplier,
                })
                .collect(),
            finishing_tiers: card
                .finishing_tiers
                .into_iter()
                .map(|f| FinishingTierDto {
                    id: f.id,
                    label: f.label,
                    cost_per_area: f.cost_per_area,
                })
                .collect(),
            labor_rate_per_area: card.labor_rate_per_area,
            min_area: card.min_area,
            max_area: card.max_area,
            area_policy: card.area_policy,
            currency: CURRENCY,
        }
    }
}
