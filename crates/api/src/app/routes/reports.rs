use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use eproc_core::ReportId;
use eproc_query::{narrow, search};
use eproc_reports::Report;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_reports))
        .route("/:id", get(get_report))
}

/// List reports, narrowed by free text (title) and type.
pub async fn list_reports(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ReportListParams>,
) -> axum::response::Response {
    let type_filter = match errors::parse_report_type(params.report_type.as_deref()) {
        Ok(filter) => filter,
        Err(resp) => return resp,
    };

    let rows: Vec<Report> = search(services.reports(), params.q.as_deref().unwrap_or(""));
    let rows = narrow(&rows, &type_filter, |r| r.report_type);

    (StatusCode::OK, Json(rows)).into_response()
}

pub async fn get_report(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ReportId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid report id");
        }
    };
    match services.report(id) {
        Some(report) => (StatusCode::OK, Json(report)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "report not found"),
    }
}
