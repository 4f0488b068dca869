//! Catalog reader port (read side).
//!
//! Read-only queries over the portfolio, materials, stored pricing rows and
//! reviews. Ordering and limits are part of the contract so every adapter
//! returns the same listings.

use async_trait::async_trait;

use crate::domain::catalog::{Material, PricingRow, Project, Review};
use crate::domain::foundation::{DomainError, ProjectId};

#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Most recently created projects, newest first, at most `limit`.
    async fn latest_projects(&self, limit: usize) -> Result<Vec<Project>, DomainError>;

    /// Completed projects ordered by completion date (newest first), at most `limit`.
    async fn completed_projects(&self, limit: usize) -> Result<Vec<Project>, DomainError>;

    /// Returns `None` if no project has this id.
    async fn get_project(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// Materials, optionally restricted to one category (case-insensitive).
    async fn list_materials(&self, category: Option<&str>) -> Result<Vec<Material>, DomainError>;

    async fn list_pricing_rows(&self) -> Result<Vec<PricingRow>, DomainError>;

    /// Reviews of a project, newest first.
    async fn reviews_for_project(&self, project_id: &ProjectId) -> Result<Vec<Review>, DomainError>;
}
