use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use stockscout_inventory::FilterCriteria;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

// -------------------------
// Query Parameters
// -------------------------

/// Raw, all-optional, all-textual search parameters. Numeric parsing and
/// normalization happen in `FilterCriteria::from_raw`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
}

/// `GET /search` — filter the store by the supplied criteria.
pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<SearchQuery>,
) -> axum::response::Response {
    let criteria = FilterCriteria::from_raw(
        query.q.as_deref(),
        query.category.as_deref(),
        query.min_price.as_deref(),
        query.max_price.as_deref(),
    );

    if let Err(e) = criteria.validate() {
        tracing::warn!(error = %e, "search rejected");
        let (status, message) = errors::domain_error_parts(&e);
        return errors::search_failure(status, message);
    }

    tracing::debug!(criteria = ?criteria, "running search");

    let results = match services.search(&criteria) {
        Ok(r) => r,
        Err(e) => {
            let (status, message) = errors::domain_error_parts(&e);
            return errors::search_failure(status, message);
        }
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "count": results.len(),
            "query": dto::QueryEcho::from(&criteria),
            "results": results,
        })),
    )
        .into_response()
}

/// `GET /categories` — distinct categories, sorted ascending.
pub async fn categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let categories = match services.categories() {
        Ok(c) => c,
        Err(e) => {
            let (status, message) = errors::domain_error_parts(&e);
            return errors::categories_failure(status, message);
        }
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "categories": categories,
        })),
    )
        .into_response()
}
