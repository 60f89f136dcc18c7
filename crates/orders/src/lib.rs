//! `eproc-orders` — purchase orders placed with vendors.

pub mod order;

pub use order::{OrderLine, OrderStatus, PaymentStatus, PurchaseOrder};
