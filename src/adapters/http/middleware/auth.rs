//! Identity extractors for axum.
//!
//! The upstream gateway authenticates the caller and forwards the result in
//! two headers:
//!
//! ```text
//! X-User-Id: <opaque user id>
//! X-User-Role: user | admin      (optional, defaults to user)
//! ```
//!
//! - `RequireAuth` - rejects requests without an identity (401)
//! - `OptionalAuth` - yields `None` for anonymous visitors
//! - `RequireAdmin` - additionally requires the admin role (403)

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId, UserRole};

use crate::adapters::http::error::ErrorResponse;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Reads the forwarded identity, if any.
///
/// A request without `X-User-Id` is anonymous. A present but unusable id or
/// role is an error rather than silently anonymous.
pub fn identity_from_headers(headers: &HeaderMap) -> Result<Option<AuthenticatedUser>, AuthError> {
    let Some(raw_id) = headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };
    let raw_id = raw_id
        .to_str()
        .map_err(|_| AuthError::InvalidIdentity("user id is not valid text".to_string()))?;
    let id = UserId::new(raw_id.trim())
        .map_err(|_| AuthError::InvalidIdentity("user id is empty".to_string()))?;

    let role = match headers.get(USER_ROLE_HEADER) {
        Some(value) => value
            .to_str()
            .map_err(|_| AuthError::InvalidIdentity("role is not valid text".to_string()))?
            .parse::<UserRole>()?,
        None => UserRole::User,
    };

    Ok(Some(AuthenticatedUser::new(id, role)))
}

/// Extractor that requires authentication.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        identity_from_headers(&parts.headers)?
            .map(RequireAuth)
            .ok_or(AuthRejection(AuthError::MissingIdentity))
    }
}

/// Extractor for optional authentication.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(identity_from_headers(&parts.headers)?))
    }
}

/// Extractor that requires an authenticated admin.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequireAuth(user) = RequireAuth::from_request_parts(parts, state).await?;
        user.require_admin()?;
        Ok(RequireAdmin(user))
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthRejection(pub AuthError);

impl From<AuthError> for AuthRejection {
    fn from(err: AuthError) -> Self {
        AuthRejection(err)
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            AuthError::MissingIdentity => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::unauthorized("Authentication required"),
            ),
            AuthError::InvalidIdentity(reason) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::unauthorized(format!("Invalid identity: {}", reason)),
            ),
            AuthError::InsufficientPermissions => (
                StatusCode::FORBIDDEN,
                ErrorResponse::forbidden("Admin role required"),
            ),
        };
        (status, Json(body)).into_response()
    }
}
