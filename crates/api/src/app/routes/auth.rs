use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use eproc_session::AuthToken;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

/// Sign in. Demo stub: any non-empty email/password pair is accepted; the
/// issued bearer token stays valid until sign-out.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    if body.email.trim().is_empty() || body.password.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_credentials",
            "email and password are required",
        );
    }

    let role = match errors::parse_role(body.role.as_deref()) {
        Ok(role) => role,
        Err(resp) => return resp,
    };

    let token = services.tokens().issue(&body.email, role);
    info!(email = %body.email, role = role.as_str(), "login");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "token": token.as_str(),
            "user": {
                "email": body.email,
                "role": role.as_str(),
            },
        })),
    )
        .into_response()
}

/// Sign out: revoke the presented bearer token.
pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(token): Extension<AuthToken>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
) -> axum::response::Response {
    services.tokens().revoke(&token);
    info!(username = principal.username(), "logout");
    (StatusCode::OK, Json(serde_json::json!({ "success": true }))).into_response()
}
