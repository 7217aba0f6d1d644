//! The API client: one async function per endpoint, a short-TTL response
//! cache, and a single automatic retry for searches.

use chrono::Duration;
use reqwest::Url;

use crate::cache::ResponseCache;
use crate::error::ClientError;
use crate::form::SearchForm;
use crate::types::{CategoriesResponse, SearchResponse};

/// Default revalidation window for cached responses.
const DEFAULT_CACHE_WINDOW_SECS: i64 = 30;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: ResponseCache,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_cache_window(base_url, Duration::seconds(DEFAULT_CACHE_WINDOW_SECS))
    }

    pub fn with_cache_window(base_url: impl Into<String>, window: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: ResponseCache::new(window),
        }
    }

    /// Run a search. A failed request is retried once before the error is
    /// surfaced; a fresh cached response short-circuits the network.
    pub async fn search(&self, form: &SearchForm) -> Result<SearchResponse, ClientError> {
        let url = self.endpoint_url("search", &form.query_pairs())?;

        if let Some(body) = self.cache.get_fresh(url.as_str()) {
            tracing::debug!(url = %url, "search served from cache");
            return decode::<SearchResponse>(body);
        }

        let body = match self.fetch(&url).await {
            Ok(body) => body,
            Err(first) => {
                tracing::warn!(url = %url, error = %first, "search failed; retrying once");
                self.fetch(&url).await?
            }
        };

        let parsed = decode::<SearchResponse>(body.clone())?;
        if !parsed.success {
            return Err(ClientError::Server(
                parsed.error.unwrap_or_else(|| "search failed".to_string()),
            ));
        }

        // Failure envelopes are never cached.
        self.cache.insert(url.as_str(), body);
        Ok(parsed)
    }

    /// Fetch the category list (cache-backed, no retry).
    pub async fn categories(&self) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint_url("categories", &[])?;

        if let Some(body) = self.cache.get_fresh(url.as_str()) {
            tracing::debug!(url = %url, "categories served from cache");
            return Ok(decode::<CategoriesResponse>(body)?.categories);
        }

        let body = self.fetch(&url).await?;
        let parsed = decode::<CategoriesResponse>(body.clone())?;
        if !parsed.success {
            return Err(ClientError::Server(
                parsed.error.unwrap_or_else(|| "category listing failed".to_string()),
            ));
        }

        self.cache.insert(url.as_str(), body);
        Ok(parsed.categories)
    }

    fn endpoint_url(&self, path: &str, pairs: &[(&str, String)]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&format!("{}/{path}", self.base_url))
            .map_err(|e| ClientError::Url(e.to_string()))?;
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// One request/response cycle. The failure envelopes are valid JSON, so
    /// bodies decode regardless of status; the envelope decides success.
    async fn fetch(&self, url: &Url) -> Result<serde_json::Value, ClientError> {
        let res = self.http.get(url.clone()).send().await?;
        Ok(res.json::<serde_json::Value>().await?)
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: serde_json::Value) -> Result<T, ClientError> {
    serde_json::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))
}
