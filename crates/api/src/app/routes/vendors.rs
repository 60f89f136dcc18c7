use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use eproc_core::VendorId;
use eproc_query::{Select, narrow, search};
use eproc_vendors::Vendor;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_vendors))
        .route("/:id", get(get_vendor))
}

/// List vendors, narrowed by free text, category, and status tab.
///
/// All predicates AND together; the result keeps fixture order.
pub async fn list_vendors(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::VendorListParams>,
) -> axum::response::Response {
    let tab = match errors::parse_vendor_tab(params.status.as_deref()) {
        Ok(tab) => tab,
        Err(resp) => return resp,
    };
    let category = Select::from_choice(params.category.filter(|c| !c.is_empty()));

    let rows: Vec<Vendor> = search(services.vendors(), params.q.as_deref().unwrap_or(""));
    let rows = narrow(&rows, &category, |v| v.category.clone());
    let rows = narrow(&rows, &tab, |v| v.status);

    (StatusCode::OK, Json(rows)).into_response()
}

pub async fn get_vendor(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: VendorId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid vendor id");
        }
    };
    match services.vendor(id) {
        Some(vendor) => (StatusCode::OK, Json(vendor)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "vendor not found"),
    }
}
