//! Short-lived response cache keyed by request URL.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

struct CacheEntry {
    fetched_at: DateTime<Utc>,
    body: serde_json::Value,
}

/// In-memory response cache with a revalidation window: entries younger
/// than the window are served without touching the network.
pub struct ResponseCache {
    window: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached body for `url` if it is still fresh.
    pub fn get_fresh(&self, url: &str) -> Option<serde_json::Value> {
        self.get_fresh_at(url, Utc::now())
    }

    pub fn insert(&self, url: &str, body: serde_json::Value) {
        self.insert_at(url, body, Utc::now());
    }

    fn get_fresh_at(&self, url: &str, now: DateTime<Utc>) -> Option<serde_json::Value> {
        let entries = self.entries.lock().unwrap();
        let entry = entries.get(url)?;
        if now - entry.fetched_at < self.window {
            Some(entry.body.clone())
        } else {
            None
        }
    }

    fn insert_at(&self, url: &str, body: serde_json::Value, now: DateTime<Utc>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            url.to_string(),
            CacheEntry {
                fetched_at: now,
                body,
            },
        );
    }
}
