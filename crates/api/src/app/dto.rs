use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

/// Query params accepted by the vendor list.
#[derive(Debug, Default, Deserialize)]
pub struct VendorListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Query params accepted by the requisition list.
#[derive(Debug, Default, Deserialize)]
pub struct RequisitionListParams {
    pub q: Option<String>,
    pub status: Option<String>,
}

/// Query params accepted by the inventory list.
#[derive(Debug, Default, Deserialize)]
pub struct InventoryListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Query params accepted by the report list.
#[derive(Debug, Default, Deserialize)]
pub struct ReportListParams {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub report_type: Option<String>,
}
