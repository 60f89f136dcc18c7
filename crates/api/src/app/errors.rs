use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use eproc_inventory::InventorySort;
use eproc_query::Select;
use eproc_reports::ReportType;
use eproc_requisitions::RequisitionStatus;
use eproc_users::UserRole;
use eproc_vendors::VendorStatus;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Parse an optional `status` query param into a vendor tab.
///
/// Absent or `"all"` means no narrowing; anything else must be a real status.
pub fn parse_vendor_tab(
    raw: Option<&str>,
) -> Result<Select<VendorStatus>, axum::response::Response> {
    parse_tab(raw, "status must be one of: all, active, pending, inactive")
}

/// Parse an optional `status` query param into a requisition tab.
pub fn parse_requisition_tab(
    raw: Option<&str>,
) -> Result<Select<RequisitionStatus>, axum::response::Response> {
    parse_tab(raw, "status must be one of: all, approved, pending, rejected")
}

/// Parse an optional `type` query param into a report filter.
pub fn parse_report_type(
    raw: Option<&str>,
) -> Result<Select<ReportType>, axum::response::Response> {
    parse_tab(raw, "type must be one of: procurement, vendor, inventory, financial")
}

/// Parse an optional `sort` query param for the inventory list.
pub fn parse_inventory_sort(
    raw: Option<&str>,
) -> Result<Option<InventorySort>, axum::response::Response> {
    match raw {
        None => Ok(None),
        Some(s) => s.parse().map(Some).map_err(|_| {
            json_error(
                StatusCode::BAD_REQUEST,
                "invalid_filter",
                "sort must be one of: name-asc, name-desc, quantity-asc, quantity-desc, price-asc, price-desc",
            )
        }),
    }
}

/// Parse the requested login role; absent means admin (the demo default).
pub fn parse_role(raw: Option<&str>) -> Result<UserRole, axum::response::Response> {
    match raw {
        None => Ok(UserRole::Admin),
        Some(s) => s.parse().map_err(|_| {
            json_error(
                StatusCode::BAD_REQUEST,
                "invalid_role",
                "role must be one of: admin, manager, user",
            )
        }),
    }
}

fn parse_tab<S: core::str::FromStr>(
    raw: Option<&str>,
    hint: &'static str,
) -> Result<Select<S>, axum::response::Response> {
    match raw {
        None | Some("all") | Some("") => Ok(Select::Any),
        Some(s) => s
            .parse()
            .map(Select::Only)
            .map_err(|_| json_error(StatusCode::BAD_REQUEST, "invalid_filter", hint)),
    }
}
