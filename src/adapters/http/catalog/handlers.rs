//! HTTP handlers for catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::application::handlers::catalog::{
    CatalogListingHandler, GetProjectQuery, ListCompletedProjectsQuery, ListLatestProjectsQuery,
    ListMaterialsQuery, ListPricingRowsQuery, ListProjectReviewsQuery, ListServicesQuery,
    ProjectQueryHandler,
};
use crate::domain::catalog::CatalogError;
use crate::domain::foundation::ProjectId;

use super::dto::{ListResponse, MaterialsParams};

#[derive(Clone)]
pub struct CatalogHandlers {
    projects: Arc<ProjectQueryHandler>,
    listings: Arc<CatalogListingHandler>,
}

impl CatalogHandlers {
    pub fn new(projects: Arc<ProjectQueryHandler>, listings: Arc<CatalogListingHandler>) -> Self {
        Self { projects, listings }
    }
}

/// GET /api/projects - Latest projects
pub async fn list_latest_projects(State(handlers): State<CatalogHandlers>) -> Response {
    match handlers.projects.latest(ListLatestProjectsQuery).await {
        Ok(projects) => (StatusCode::OK, Json(ListResponse::from(projects))).into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/projects/completed - Recently completed projects
pub async fn list_completed_projects(State(handlers): State<CatalogHandlers>) -> Response {
    match handlers.projects.completed(ListCompletedProjectsQuery).await {
        Ok(projects) => (StatusCode::OK, Json(ListResponse::from(projects))).into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/projects/:id - One project
pub async fn get_project(
    State(handlers): State<CatalogHandlers>,
    Path(project_id): Path<String>,
) -> Response {
    let project_id = match parse_project_id(&project_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.projects.get(GetProjectQuery { project_id }).await {
        Ok(project) => (StatusCode::OK, Json(project)).into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/projects/:id/reviews - Reviews of a project
pub async fn list_project_reviews(
    State(handlers): State<CatalogHandlers>,
    Path(project_id): Path<String>,
) -> Response {
    let project_id = match parse_project_id(&project_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .projects
        .reviews(ListProjectReviewsQuery { project_id })
        .await
    {
        Ok(reviews) => (StatusCode::OK, Json(ListResponse::from(reviews))).into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/materials?category= - Materials, optionally by category
pub async fn list_materials(
    State(handlers): State<CatalogHandlers>,
    Query(params): Query<MaterialsParams>,
) -> Response {
    let query = ListMaterialsQuery {
        category: params.category,
    };
    match handlers.listings.materials(query).await {
        Ok(materials) => (StatusCode::OK, Json(ListResponse::from(materials))).into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/pricing - Stored per-area prices
pub async fn list_pricing_rows(State(handlers): State<CatalogHandlers>) -> Response {
    match handlers.listings.pricing_rows(ListPricingRowsQuery).await {
        Ok(rows) => (StatusCode::OK, Json(ListResponse::from(rows))).into_response(),
        Err(e) => handle_catalog_error(e),
    }
}

/// GET /api/services - Service offerings
pub async fn list_services(State(handlers): State<CatalogHandlers>) -> Response {
    let services = handlers.listings.services(ListServicesQuery);
    (StatusCode::OK, Json(ListResponse::from(services))).into_response()
}

fn parse_project_id(raw: &str) -> Result<ProjectId, Response> {
    raw.parse::<ProjectId>()
        .map_err(|_| ApiError::bad_request("Invalid project ID").into_response())
}

fn handle_catalog_error(error: CatalogError) -> Response {
    match error {
        CatalogError::ProjectNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                error.code(),
                format!("Project not found: {}", id),
            )),
        )
            .into_response(),
        CatalogError::Infrastructure(_) => ApiError::internal(error).into_response(),
    }
}
