//! Service wiring: the loaded store plus the query operations over it.

use stockscout_core::DomainResult;
use stockscout_inventory::{FilterCriteria, InventoryRecord, InventoryStore, filter};

/// Shared application services: the read-only store and the queries the
/// handlers run against it.
#[derive(Debug)]
pub struct AppServices {
    store: InventoryStore,
}

/// Load the store and assemble services. Called once at startup.
pub fn build_services() -> DomainResult<AppServices> {
    let store = InventoryStore::load()?;
    tracing::info!(records = store.len(), "inventory store loaded");
    Ok(AppServices { store })
}

impl AppServices {
    pub fn with_store(store: InventoryStore) -> Self {
        Self { store }
    }

    /// Run the query filter over the full store.
    pub fn search(&self, criteria: &FilterCriteria) -> DomainResult<Vec<InventoryRecord>> {
        Ok(filter(self.store.records(), criteria))
    }

    /// Distinct categories, sorted ascending.
    pub fn categories(&self) -> DomainResult<Vec<String>> {
        Ok(self.store.distinct_categories())
    }

    pub fn store_len(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_services_loads_the_embedded_store() {
        let services = build_services().unwrap();
        assert!(services.store_len() > 0);

        let all = services.search(&FilterCriteria::default()).unwrap();
        assert_eq!(all.len(), services.store_len());
    }
}
