use serde::{Deserialize, Serialize};

/// Departmental budget allocation for one fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentBudget {
    pub name: String,
    pub total_budget: f64,
    pub spent: f64,
    pub remaining: f64,
}

impl DepartmentBudget {
    /// remaining must equal total − spent.
    pub fn is_balanced(&self) -> bool {
        (self.total_budget - self.spent - self.remaining).abs() < 0.005
    }
}

/// Budget rows shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    pub fiscal_year: String,
    pub departments: Vec<DepartmentBudget>,
}
