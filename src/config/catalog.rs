//! Catalog seed configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::catalog::{CatalogSeed, CatalogSeedError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML file with projects, materials, pricing rows and reviews.
    pub seed_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Reads the seed file, or returns an empty catalog when none is set.
    pub fn load_seed(&self) -> Result<CatalogSeed, CatalogSeedError> {
        match &self.seed_path {
            Some(path) => CatalogSeed::from_yaml_file(path),
            None => Ok(CatalogSeed::default()),
        }
    }
}
