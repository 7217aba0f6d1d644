//! The inventory store: a fixed, preloaded ordered sequence of records.

use std::collections::BTreeSet;

use stockscout_core::{DomainError, DomainResult};

use crate::record::InventoryRecord;

/// Dataset embedded at compile time; parsed once at startup.
const DATASET: &str = include_str!("../data/inventory.json");

/// Read-only record store. Loaded once at process start, never mutated.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    records: Vec<InventoryRecord>,
}

impl InventoryStore {
    /// Load the embedded dataset. A malformed dataset is a startup error,
    /// not something to limp past.
    pub fn load() -> DomainResult<Self> {
        let records: Vec<InventoryRecord> = serde_json::from_str(DATASET)
            .map_err(|e| DomainError::internal(format!("failed to load inventory dataset: {e}")))?;
        Ok(Self { records })
    }

    /// Build a store from explicit records (tests, fixtures).
    pub fn from_records(records: Vec<InventoryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct category values, ascending lexicographic order, no
    /// duplicates.
    pub fn distinct_categories(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
