use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eproc_core::{DomainError, Entity, ReportId, UserId};
use eproc_query::TextSearch;

/// Subject area a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Procurement,
    Vendor,
    Inventory,
    Financial,
}

impl core::str::FromStr for ReportType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "procurement" => Ok(ReportType::Procurement),
            "vendor" => Ok(ReportType::Vendor),
            "inventory" => Ok(ReportType::Inventory),
            "financial" => Ok(ReportType::Financial),
            other => Err(DomainError::validation(format!(
                "type must be one of: procurement, vendor, inventory, financial (got '{other}')"
            ))),
        }
    }
}

/// File format a report was rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "Excel")]
    Excel,
    #[serde(rename = "CSV")]
    Csv,
}

/// A generated report artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub format: ReportFormat,
    #[serde(rename = "dateGenerated")]
    pub generated_at: DateTime<Utc>,
    pub generated_by: UserId,
    pub size: String,
}

impl Entity for Report {
    type Id = ReportId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TextSearch for Report {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report {
        Report {
            id: ReportId::new(201),
            title: "Monthly Procurement Summary".to_string(),
            report_type: ReportType::Procurement,
            format: ReportFormat::Pdf,
            generated_at: "2025-04-01T08:15:30Z".parse().unwrap(),
            generated_by: UserId::new(2),
            size: "2.4 MB".to_string(),
        }
    }

    #[test]
    fn wire_shape_matches_portal_keys() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["type"], "procurement");
        assert_eq!(json["format"], "PDF");
        assert!(json.get("dateGenerated").is_some());
        assert_eq!(json["generatedBy"], 2);
    }

    #[test]
    fn type_parses_from_filter_values() {
        assert_eq!("financial".parse::<ReportType>().unwrap(), ReportType::Financial);
        assert!("payroll".parse::<ReportType>().is_err());
    }

    #[test]
    fn format_round_trips_uppercase_names() {
        for (format, name) in [
            (ReportFormat::Pdf, "PDF"),
            (ReportFormat::Excel, "Excel"),
            (ReportFormat::Csv, "CSV"),
        ] {
            let json = serde_json::to_value(format).unwrap();
            assert_eq!(json, name);
            let back: ReportFormat = serde_json::from_value(json).unwrap();
            assert_eq!(back, format);
        }
    }
}
