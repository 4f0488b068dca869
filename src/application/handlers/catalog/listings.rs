//! Materials, pricing rows and service offerings.

use std::sync::Arc;

use crate::domain::catalog::{standard_services, CatalogError, Material, PricingRow, ServiceOffering};
use crate::ports::CatalogReader;

#[derive(Debug, Clone, Default)]
pub struct ListMaterialsQuery {
    /// Restricts the listing to one category when set and non-blank.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListPricingRowsQuery;

#[derive(Debug, Clone, Default)]
pub struct ListServicesQuery;

pub struct CatalogListingHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl CatalogListingHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    pub async fn materials(&self, query: ListMaterialsQuery) -> Result<Vec<Material>, CatalogError> {
        let category = query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        Ok(self.catalog.list_materials(category).await?)
    }

    pub async fn pricing_rows(&self, _query: ListPricingRowsQuery) -> Result<Vec<PricingRow>, CatalogError> {
        Ok(self.catalog.list_pricing_rows().await?)
    }

    pub fn services(&self, _query: ListServicesQuery) -> Vec<ServiceOffering> {
        standard_services()
    }
}
