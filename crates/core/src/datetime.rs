//! Timestamp parsing and display formatting.
//!
//! Display formatting never fails: absent input renders as `"N/A"` and
//! unparseable input as `"Invalid Date"` so table cells degrade to a
//! placeholder instead of an error.

use chrono::{DateTime, Utc};

use crate::error::{DomainError, DomainResult};

/// Placeholder for a missing timestamp.
pub const MISSING_DATE: &str = "N/A";

/// Placeholder for a timestamp that failed to parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(raw: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::validation(format!("timestamp: {e}")))
}

/// Render an optional raw timestamp for display.
///
/// `"10 Apr 2025, 09:32"` on success; placeholders otherwise.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return MISSING_DATE.to_string();
    };
    if raw.trim().is_empty() {
        return MISSING_DATE.to_string();
    }
    match parse_timestamp(raw) {
        Ok(dt) => dt.format("%d %b %Y, %H:%M").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}
