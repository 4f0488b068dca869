//! Catalog domain - portfolio projects, materials, pricing rows, reviews
//! and the fixed list of services.
//!
//! All catalog data is read-only at runtime.

mod errors;
mod material;
mod pricing_row;
mod project;
mod review;
mod seed;
mod service;

pub use errors::CatalogError;
pub use material::{Material, MaterialQuality};
pub use pricing_row::PricingRow;
pub use project::{Project, ProjectCategory, ProjectStatus};
pub use review::{Rating, Review};
pub use seed::{CatalogSeed, CatalogSeedError};
pub use service::{standard_services, PriceBasis, ServiceOffering, CURRENCY};

/// Number of projects on the latest-projects listing.
pub const LATEST_PROJECTS_LIMIT: usize = 10;

/// Number of projects on the completed-projects listing.
pub const COMPLETED_PROJECTS_LIMIT: usize = 6;
