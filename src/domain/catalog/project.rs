//! Portfolio projects shown in the gallery.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProjectId, Timestamp, ValidationError};

/// Kind of space a portfolio project covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    Residential,
    Commercial,
    Villa,
    Apartment,
}

/// Delivery state of a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    Completed,
}

/// A showcased interior-design project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
    #[serde(default)]
    pub created_at: Timestamp,
}

impl Project {
    /// Creates a planning-stage project with only the required fields set.
    pub fn new(title: impl Into<String>, category: ProjectCategory) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            id: ProjectId::new(),
            title,
            description: None,
            category,
            style: None,
            area: None,
            budget: None,
            images: Vec::new(),
            location: None,
            latitude: None,
            longitude: None,
            status: ProjectStatus::Planning,
            completed_at: None,
            created_at: Timestamp::now(),
        })
    }

    /// Marks the project completed at the given moment.
    pub fn completed(mut self, at: Timestamp) -> Self {
        self.status = ProjectStatus::Completed;
        self.completed_at = Some(at);
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProjectStatus::Completed
    }

    /// Checks invariants of a project loaded from seed data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if let Some(area) = self.area {
            if !area.is_finite() || area <= 0.0 {
                return Err(ValidationError::invalid_format("area", "must be a positive number"));
            }
        }
        if let Some(budget) = self.budget {
            if !budget.is_finite() || budget < 0.0 {
                return Err(ValidationError::invalid_format("budget", "must not be negative"));
            }
        }
        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(ValidationError::invalid_format("latitude", "must be within ±90"));
            }
        }
        if let Some(lon) = self.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(ValidationError::invalid_format("longitude", "must be within ±180"));
            }
        }
        Ok(())
    }
}
