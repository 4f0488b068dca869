//! Catalog handlers (read-only).

mod listings;
mod projects;

pub use listings::{
    CatalogListingHandler, ListMaterialsQuery, ListPricingRowsQuery, ListServicesQuery,
};
pub use projects::{
    GetProjectQuery, ListCompletedProjectsQuery, ListLatestProjectsQuery, ListProjectReviewsQuery,
    ProjectQueryHandler,
};
