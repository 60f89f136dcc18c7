use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eproc_core::{DomainError, DomainResult, Entity, RequisitionId, UserId};
use eproc_query::TextSearch;

/// Requisition approval status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequisitionStatus {
    Approved,
    Pending,
    Rejected,
}

impl RequisitionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequisitionStatus::Approved => "approved",
            RequisitionStatus::Pending => "pending",
            RequisitionStatus::Rejected => "rejected",
        }
    }
}

impl core::str::FromStr for RequisitionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(RequisitionStatus::Approved),
            "pending" => Ok(RequisitionStatus::Pending),
            "rejected" => Ok(RequisitionStatus::Rejected),
            other => Err(DomainError::validation(format!(
                "status must be one of: approved, pending, rejected (got '{other}')"
            ))),
        }
    }
}

/// Urgency of a requisition. Ordered: low < medium < high < critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

/// A single requested line: what, how many, at what price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineItem {
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// An internal purchase request awaiting approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requisition {
    pub id: RequisitionId,
    pub title: String,
    pub department: String,
    pub requested_by: UserId,
    #[serde(rename = "dateRequested")]
    pub requested_at: DateTime<Utc>,
    pub status: RequisitionStatus,
    pub priority: Priority,
    pub total_amount: f64,
    pub items: Vec<LineItem>,
}

impl Requisition {
    /// Sum of line totals.
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Check the stored total against the line items.
    ///
    /// Amounts are currency values; a half-paisa tolerance absorbs float
    /// representation noise without hiding real mismatches.
    pub fn validate_total(&self) -> DomainResult<()> {
        let computed = self.items_total();
        if (computed - self.total_amount).abs() > 0.005 {
            return Err(DomainError::invariant(format!(
                "total_amount {} does not match line items total {computed}",
                self.total_amount
            )));
        }
        Ok(())
    }
}

impl Entity for Requisition {
    type Id = RequisitionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TextSearch for Requisition {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.department]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn requisition(total: f64, items: Vec<LineItem>) -> Requisition {
        Requisition {
            id: RequisitionId::new(1001),
            title: "IT Infrastructure Upgrade".to_string(),
            department: "IT".to_string(),
            requested_by: UserId::new(3),
            requested_at: "2025-04-10T09:32:15Z".parse().unwrap(),
            status: RequisitionStatus::Approved,
            priority: Priority::High,
            total_amount: total,
            items,
        }
    }

    #[test]
    fn line_total_is_quantity_times_price() {
        let line = LineItem {
            name: "Printer Paper".to_string(),
            quantity: 500,
            unit_price: 250.0,
        };
        assert_eq!(line.line_total(), 125_000.0);
    }

    #[test]
    fn validate_total_accepts_consistent_records() {
        let req = requisitions_fixture();
        assert!(req.validate_total().is_ok());
    }

    #[test]
    fn validate_total_rejects_mismatches() {
        let mut req = requisitions_fixture();
        req.total_amount += 1.0;
        let err = req.validate_total().unwrap_err();
        match err {
            DomainError::InvariantViolation(_) => {}
            other => panic!("expected InvariantViolation, got {other:?}"),
        }
    }

    fn requisitions_fixture() -> Requisition {
        requisition(
            1_275_000.0,
            vec![
                LineItem {
                    name: "Server Racks".to_string(),
                    quantity: 5,
                    unit_price: 185_000.0,
                },
                LineItem {
                    name: "Network Switches".to_string(),
                    quantity: 10,
                    unit_price: 35_000.0,
                },
            ],
        )
    }

    #[test]
    fn priority_orders_low_to_critical() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert!(Priority::High < Priority::Critical);
    }

    #[test]
    fn wire_shape_uses_date_requested_key() {
        let req = requisitions_fixture();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["status"], "approved");
        assert_eq!(json["priority"], "high");
        assert!(json.get("dateRequested").is_some());
        assert!(json.get("requested_at").is_none());
    }

    proptest! {
        /// items_total equals the sum of each line's quantity × unit price.
        #[test]
        fn items_total_matches_line_arithmetic(
            lines in proptest::collection::vec((1u32..100, 1u32..10_000), 0..8)
        ) {
            let items: Vec<LineItem> = lines
                .iter()
                .map(|&(quantity, price)| LineItem {
                    name: String::new(),
                    quantity,
                    unit_price: f64::from(price),
                })
                .collect();
            let expected: f64 = lines
                .iter()
                .map(|&(quantity, price)| f64::from(quantity) * f64::from(price))
                .sum();
            let req = requisition(expected, items);
            prop_assert_eq!(req.items_total(), expected);
            prop_assert!(req.validate_total().is_ok());
        }
    }
}
