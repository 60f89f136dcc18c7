use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use eproc_core::RequisitionId;
use eproc_query::{narrow, search};
use eproc_requisitions::Requisition;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_requisitions))
        .route("/:id", get(get_requisition))
}

/// List requisitions, narrowed by free text (title/department) and status tab.
pub async fn list_requisitions(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::RequisitionListParams>,
) -> axum::response::Response {
    let tab = match errors::parse_requisition_tab(params.status.as_deref()) {
        Ok(tab) => tab,
        Err(resp) => return resp,
    };

    let rows: Vec<Requisition> = search(services.requisitions(), params.q.as_deref().unwrap_or(""));
    let rows = narrow(&rows, &tab, |r| r.status);

    (StatusCode::OK, Json(rows)).into_response()
}

pub async fn get_requisition(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RequisitionId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_id",
                "invalid requisition id",
            );
        }
    };
    match services.requisition(id) {
        Some(req) => (StatusCode::OK, Json(req)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "requisition not found"),
    }
}
