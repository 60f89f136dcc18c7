use axum::{Router, routing::get, routing::post};

pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod orders;
pub mod reports;
pub mod requisitions;
pub mod system;
pub mod users;
pub mod vendors;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/auth/logout", post(auth::logout))
        .nest("/vendors", vendors::router())
        .nest("/requisitions", requisitions::router())
        .nest("/inventory", inventory::router())
        .nest("/reports", reports::router())
        .nest("/orders", orders::router())
        .nest("/users", users::router())
        .nest("/dashboard", dashboard::router())
}
