//! `eproc-inventory` — stocked items and their reorder state.

pub mod item;

pub use item::{InventoryItem, InventorySort, StockStatus, categories, total_value};
