//! DTOs for catalog endpoints.
//!
//! Catalog records are returned in their stored shape; only request
//! parameters and list envelopes live here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialsParams {
    pub category: Option<String>,
}

/// List envelope with a count, used by every listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_counts_items() {
        let json = serde_json::to_value(ListResponse::from(vec!["a", "b"])).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["items"][1], "b");
    }
}
