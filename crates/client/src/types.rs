//! Wire shapes of the API responses.
//!
//! Declared here rather than imported from the server crates so the client
//! only depends on the published JSON contract.

use serde::Deserialize;

use stockscout_inventory::InventoryRecord;

/// Echoed query parameters from a successful search.
#[derive(Debug, Clone, Deserialize)]
pub struct EchoedQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<f64>,
}

/// `GET /search` response envelope (success or failure shape).
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub count: usize,
    pub query: Option<EchoedQuery>,
    pub error: Option<String>,
    #[serde(default)]
    pub results: Vec<InventoryRecord>,
}

/// `GET /categories` response envelope.
#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub error: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}
