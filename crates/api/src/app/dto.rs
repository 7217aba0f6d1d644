use serde::Serialize;

use stockscout_inventory::FilterCriteria;

/// Normalized query parameters echoed back in a successful search
/// response. Absent (or unparsable numeric) parameters echo as null.
#[derive(Debug, Serialize)]
pub struct QueryEcho {
    pub q: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<f64>,
}

impl From<&FilterCriteria> for QueryEcho {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            q: criteria.name.clone(),
            category: criteria.category.clone(),
            min_price: criteria.min_price,
            max_price: criteria.max_price,
        }
    }
}
