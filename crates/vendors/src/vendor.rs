use serde::{Deserialize, Serialize};

use eproc_core::{Entity, VendorId};
use eproc_query::TextSearch;

/// Vendor status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    Active,
    Pending,
    Inactive,
}

impl VendorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorStatus::Active => "active",
            VendorStatus::Pending => "pending",
            VendorStatus::Inactive => "inactive",
        }
    }
}

impl core::str::FromStr for VendorStatus {
    type Err = eproc_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(VendorStatus::Active),
            "pending" => Ok(VendorStatus::Pending),
            "inactive" => Ok(VendorStatus::Inactive),
            other => Err(eproc_core::DomainError::validation(format!(
                "status must be one of: active, pending, inactive (got '{other}')"
            ))),
        }
    }
}

/// Contact information for a vendor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// An external supplier with status and performance rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub category: String,
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub status: VendorStatus,
    pub rating: f64,
    pub total_orders: u32,
}

impl Vendor {
    /// Whether this vendor can currently receive orders.
    pub fn is_active(&self) -> bool {
        self.status == VendorStatus::Active
    }

    /// Display reference, e.g. `V-0007`.
    pub fn reference(&self) -> String {
        format!("V-{:04}", self.id.as_u64())
    }
}

impl Entity for Vendor {
    type Id = VendorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TextSearch for Vendor {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.contact.contact_person]
    }
}

/// Distinct categories in first-appearance order (filter dropdown source).
pub fn categories(vendors: &[Vendor]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for vendor in vendors {
        if !out.contains(&vendor.category) {
            out.push(vendor.category.clone());
        }
    }
    out
}
