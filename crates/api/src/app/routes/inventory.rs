use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use eproc_core::ItemId;
use eproc_inventory::InventoryItem;
use eproc_query::{Select, narrow, search, sort_by_key};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_inventory))
        .route("/:id", get(get_item))
}

/// List inventory, narrowed by free text and category, then ordered by the
/// selected sort key (ties keep fixture order).
pub async fn list_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::InventoryListParams>,
) -> axum::response::Response {
    let sort = match errors::parse_inventory_sort(params.sort.as_deref()) {
        Ok(sort) => sort,
        Err(resp) => return resp,
    };
    let category = Select::from_choice(params.category.filter(|c| !c.is_empty()));

    let rows: Vec<InventoryItem> = search(services.inventory(), params.q.as_deref().unwrap_or(""));
    let mut rows = narrow(&rows, &category, |i| i.category.clone());
    if let Some(sort) = sort {
        rows = sort_by_key(&rows, &sort);
    }

    (StatusCode::OK, Json(rows)).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id");
        }
    };
    match services.inventory_item(id) {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "inventory item not found"),
    }
}
