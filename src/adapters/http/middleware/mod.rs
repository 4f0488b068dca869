//! HTTP middleware for axum.
//!
//! - `auth` - Identity extractors

pub mod auth;

pub use auth::{
    identity_from_headers, AuthRejection, OptionalAuth, RequireAdmin, RequireAuth,
    USER_ID_HEADER, USER_ROLE_HEADER,
};
