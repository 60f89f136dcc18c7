//! `eproc-requisitions` — internal purchase requests awaiting approval.

pub mod requisition;

pub use requisition::{LineItem, Priority, Requisition, RequisitionStatus};
