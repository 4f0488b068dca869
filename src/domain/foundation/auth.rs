//! Authentication types for the domain layer.
//!
//! Identity is established upstream; these types carry the result into
//! request handlers. Any provider that can supply a user id and a role can
//! populate them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UserId;

/// Role granted to a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            other => Err(AuthError::InvalidIdentity(format!("unknown role '{}'", other))),
        }
    }
}

/// Authenticated user attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, role: UserRole) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Fails unless the user holds the admin role.
    pub fn require_admin(&self) -> Result<(), AuthError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AuthError::InsufficientPermissions)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Authentication required")]
    MissingIdentity,

    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_ignores_case_and_whitespace() {
        assert_eq!(" Admin ".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("user".parse::<UserRole>().unwrap(), UserRole::User);
        assert!(matches!(
            "owner".parse::<UserRole>(),
            Err(AuthError::InvalidIdentity(_))
        ));
    }

    #[test]
    fn only_admins_pass_admin_check() {
        let id = UserId::new("u-1").unwrap();
        assert!(AuthenticatedUser::new(id.clone(), UserRole::Admin)
            .require_admin()
            .is_ok());
        assert_eq!(
            AuthenticatedUser::new(id, UserRole::User).require_admin(),
            Err(AuthError::InsufficientPermissions)
        );
    }
}
