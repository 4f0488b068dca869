//! Portfolio project queries.

use std::sync::Arc;

use crate::domain::catalog::{
    CatalogError, Project, Review, COMPLETED_PROJECTS_LIMIT, LATEST_PROJECTS_LIMIT,
};
use crate::domain::foundation::ProjectId;
use crate::ports::CatalogReader;

#[derive(Debug, Clone, Default)]
pub struct ListLatestProjectsQuery;

#[derive(Debug, Clone, Default)]
pub struct ListCompletedProjectsQuery;

#[derive(Debug, Clone)]
pub struct GetProjectQuery {
    pub project_id: ProjectId,
}

#[derive(Debug, Clone)]
pub struct ListProjectReviewsQuery {
    pub project_id: ProjectId,
}

/// Handler for the project gallery queries.
pub struct ProjectQueryHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl ProjectQueryHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    /// Newest projects, at most ten.
    pub async fn latest(&self, _query: ListLatestProjectsQuery) -> Result<Vec<Project>, CatalogError> {
        Ok(self.catalog.latest_projects(LATEST_PROJECTS_LIMIT).await?)
    }

    /// Most recently completed projects, at most six.
    pub async fn completed(
        &self,
        _query: ListCompletedProjectsQuery,
    ) -> Result<Vec<Project>, CatalogError> {
        Ok(self
            .catalog
            .completed_projects(COMPLETED_PROJECTS_LIMIT)
            .await?)
    }

    pub async fn get(&self, query: GetProjectQuery) -> Result<Project, CatalogError> {
        self.catalog
            .get_project(&query.project_id)
            .await?
            .ok_or(CatalogError::ProjectNotFound(query.project_id))
    }

    /// Reviews of an existing project, newest first.
    pub async fn reviews(&self, query: ListProjectReviewsQuery) -> Result<Vec<Review>, CatalogError> {
        if self.catalog.get_project(&query.project_id).await?.is_none() {
            return Err(CatalogError::ProjectNotFound(query.project_id));
        }
        Ok(self.catalog.reviews_for_project(&query.project_id).await?)
    }
}
