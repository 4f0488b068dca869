//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod app;
pub mod assistant;
pub mod catalog;
pub mod consultation;
pub mod error;
pub mod health;
pub mod middleware;
pub mod pricing;

pub use app::{api_router, create_router, AppDependencies, AppState};
pub use error::{ApiError, ErrorResponse};
