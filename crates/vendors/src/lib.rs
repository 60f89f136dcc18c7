//! `eproc-vendors` — external supplier records.

pub mod vendor;

pub use vendor::{ContactInfo, Vendor, VendorStatus, categories};
