use serde::{Deserialize, Serialize};

use stockscout_core::Entity;

/// Inventory record identifier (unique within the dataset).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One inventory entry. Created once at load time, never mutated.
///
/// Field names match the wire shape exactly; records serialize straight into
/// API responses without a mapping layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: RecordId,
    pub product_name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub supplier: String,
    pub city: String,
}

impl Entity for InventoryRecord {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
