//! HTTP adapter for the read-only catalog.

mod dto;
mod handlers;
mod routes;

pub use dto::{ListResponse, MaterialsParams};
pub use handlers::CatalogHandlers;
pub use routes::catalog_routes;
