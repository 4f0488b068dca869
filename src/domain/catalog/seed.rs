//! Catalog seed data loaded at startup.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::{Material, PricingRow, Project, Review};
use crate::domain::foundation::ValidationError;

#[derive(Debug, Error)]
pub enum CatalogSeedError {
    #[error("cannot read catalog seed {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog seed: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid {entity} '{name}': {source}")]
    Invalid {
        entity: &'static str,
        name: String,
        #[source]
        source: ValidationError,
    },

    #[error("review references unknown project {0}")]
    DanglingReview(String),
}

/// Everything the read-only catalog holds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub pricing: Vec<PricingRow>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl CatalogSeed {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogSeedError> {
        let seed: CatalogSeed = serde_yaml::from_str(yaml)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogSeedError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogSeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Validates every record and that reviews point at seeded projects.
    pub fn validate(&self) -> Result<(), CatalogSeedError> {
        for project in &self.projects {
            project.validate().map_err(|source| CatalogSeedError::Invalid {
                entity: "project",
                name: project.title.clone(),
                source,
            })?;
        }
        for material in &self.materials {
            material.validate().map_err(|source| CatalogSeedError::Invalid {
                entity: "material",
                name: material.name.clone(),
                source,
            })?;
        }
        for row in &self.pricing {
            row.validate().map_err(|source| CatalogSeedError::Invalid {
                entity: "pricing row",
                name: format!("{}/{}", row.project_type, row.style),
                source,
            })?;
        }

        let project_ids: HashSet<_> = self.projects.iter().map(|p| p.id).collect();
        if let Some(review) = self
            .reviews
            .iter()
            .find(|r| !project_ids.contains(&r.project_id))
        {
            return Err(CatalogSeedError::DanglingReview(review.project_id.to_string()));
        }
        Ok(())
    }
}
