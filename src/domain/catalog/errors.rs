//! Catalog query errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::ProjectNotFound(_) => ErrorCode::ProjectNotFound,
            CatalogError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        CatalogError::Infrastructure(err.to_string())
    }
}
