//! `eproc-fixtures` — the mock data store.
//!
//! Static sample records with fixed relationships (foreign keys by numeric
//! id). Collections are built once on first access and are read-only
//! thereafter; accessors hand out shared slices, never mutable state.

pub mod budget;
pub mod data;

pub use budget::{BudgetSnapshot, DepartmentBudget};
pub use data::{budget, inventory_items, orders, reports, requisitions, users, vendors};
