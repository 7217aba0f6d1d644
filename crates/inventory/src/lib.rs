//! Inventory domain module.
//!
//! This crate contains the inventory search rules, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). The dataset is
//! embedded at compile time and loaded once; everything else is a pure
//! function over it.

pub mod criteria;
pub mod filter;
pub mod record;
pub mod store;

pub use criteria::FilterCriteria;
pub use filter::filter;
pub use record::{InventoryRecord, RecordId};
pub use store::InventoryStore;
