//! `eproc-reports` — generated report artifacts.

pub mod report;

pub use report::{Report, ReportFormat, ReportType};
