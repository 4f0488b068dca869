//! In-memory catalog, seeded once at startup.

use async_trait::async_trait;
use std::cmp::Reverse;

use crate::domain::catalog::{CatalogSeed, Material, PricingRow, Project, Review};
use crate::domain::foundation::{DomainError, ProjectId};
use crate::ports::CatalogReader;

/// Immutable catalog held in memory.
///
/// The data never changes after construction, so no locking is needed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    projects: Vec<Project>,
    materials: Vec<Material>,
    pricing: Vec<PricingRow>,
    reviews: Vec<Review>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: CatalogSeed) -> Self {
        Self {
            projects: seed.projects,
            materials: seed.materials,
            pricing: seed.pricing,
            reviews: seed.reviews,
        }
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

#[async_trait]
impl CatalogReader for InMemoryCatalog {
    async fn latest_projects(&self, limit: usize) -> Result<Vec<Project>, DomainError> {
        let mut projects = self.projects.clone();
        projects.sort_by_key(|p| Reverse(p.created_at));
        projects.truncate(limit);
        Ok(projects)
    }

    async fn completed_projects(&self, limit: usize) -> Result<Vec<Project>, DomainError> {
        let mut projects: Vec<Project> = self
            .projects
            .iter()
            .filter(|p| p.is_completed())
            .cloned()
            .collect();
        // Projects without a completion date sort last.
        projects.sort_by_key(|p| Reverse(p.completed_at));
        projects.truncate(limit);
        Ok(projects)
    }

    async fn get_project(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        Ok(self.projects.iter().find(|p| &p.id == id).cloned())
    }

    async fn list_materials(&self, category: Option<&str>) -> Result<Vec<Material>, DomainError> {
        Ok(self
            .materials
            .iter()
            .filter(|m| category.map_or(true, |c| m.in_category(c)))
            .cloned()
            .collect())
    }

    async fn list_pricing_rows(&self) -> Result<Vec<PricingRow>, DomainError> {
        Ok(self.pricing.clone())
    }

    async fn reviews_for_project(&self, project_id: &ProjectId) -> Result<Vec<Review>, DomainError> {
        let mut reviews: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| &r.project_id == project_id)
            .cloned()
            .collect();
        reviews.sort_by_key(|r| Reverse(r.created_at));
        Ok(reviews)
    }
}
