//! HTTP routes for catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    get_project, list_completed_projects, list_latest_projects, list_materials,
    list_pricing_rows, list_project_reviews, list_services, CatalogHandlers,
};

pub fn catalog_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/api/projects", get(list_latest_projects))
        .route("/api/projects/completed", get(list_completed_projects))
        .route("/api/projects/:id", get(get_project))
        .route("/api/projects/:id/reviews", get(list_project_reviews))
        .route("/api/materials", get(list_materials))
        .route("/api/pricing", get(list_pricing_rows))
        .route("/api/services", get(list_services))
        .with_state(handlers)
}
