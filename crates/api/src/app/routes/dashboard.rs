use std::sync::Arc;

use axum::{Json, Router, extract::Extension, http::StatusCode, response::IntoResponse, routing::get};

use eproc_core::format_timestamp;
use eproc_inventory::{StockStatus, total_value};
use eproc_orders::OrderStatus;
use eproc_requisitions::RequisitionStatus;
use eproc_users::name_of;
use eproc_vendors::VendorStatus;

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/summary", get(summary))
}

/// Aggregate counts shown on the dashboard, computed from the collections.
pub async fn summary(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let requisitions = services.requisitions();
    let vendors = services.vendors();
    let inventory = services.inventory();
    let orders = services.orders();

    let req_count = |status: RequisitionStatus| {
        requisitions.iter().filter(|r| r.status == status).count()
    };
    let vendor_count =
        |status: VendorStatus| vendors.iter().filter(|v| v.status == status).count();
    let stock_count =
        |status: StockStatus| inventory.iter().filter(|i| i.status == status).count();
    let order_count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();

    // Most recent first, capped at five.
    let mut recent: Vec<_> = requisitions.iter().collect();
    recent.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
    let recent: Vec<serde_json::Value> = recent
        .into_iter()
        .take(5)
        .map(|r| {
            serde_json::json!({
                "id": r.id,
                "title": r.title,
                "requestedBy": name_of(services.users(), r.requested_by),
                "status": r.status.as_str(),
                "priority": r.priority.as_str(),
                "totalAmount": r.total_amount,
                "dateRequested": r.requested_at,
                "dateRequestedDisplay": format_timestamp(Some(&r.requested_at.to_rfc3339())),
            })
        })
        .collect();

    let body = serde_json::json!({
        "requisitions": {
            "statusCounts": {
                "approved": req_count(RequisitionStatus::Approved),
                "pending": req_count(RequisitionStatus::Pending),
                "rejected": req_count(RequisitionStatus::Rejected),
            },
            "recent": recent,
        },
        "vendors": {
            "statusCounts": {
                "active": vendor_count(VendorStatus::Active),
                "pending": vendor_count(VendorStatus::Pending),
                "inactive": vendor_count(VendorStatus::Inactive),
            },
        },
        "inventory": {
            "totalItems": inventory.len(),
            "statusCounts": {
                "in-stock": stock_count(StockStatus::InStock),
                "low-stock": stock_count(StockStatus::LowStock),
                "out-of-stock": stock_count(StockStatus::OutOfStock),
            },
            "reorderNeeded": inventory.iter().filter(|i| i.needs_reorder()).count(),
            "totalValue": total_value(inventory),
        },
        "orders": {
            "statusCounts": {
                "processing": order_count(OrderStatus::Processing),
                "in-transit": order_count(OrderStatus::InTransit),
                "delivered": order_count(OrderStatus::Delivered),
            },
        },
        "budget": services.budget(),
    });

    (StatusCode::OK, Json(body)).into_response()
}
