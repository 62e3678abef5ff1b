use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::secure_compare;
use crate::constants::ADMIN_PASS_HEADER;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use atelier_core::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SessionCheckRequest {
    pub password: String,
}

/// Password check for the admin UI. Stateless: no token is issued, the
/// client re-sends the password on every gated request.
#[utoipa::path(
    post,
    path = "/api/v0/admin/session",
    tag = "admin",
    request_body(content = SessionCheckRequest, description = "Optional; the x-admin-pass header takes precedence"),
    responses(
        (status = 200, description = "Password matches"),
        (status = 401, description = "Password missing or wrong", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, headers, body), fields(operation = "admin_session_check"))]
pub async fn check_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Option<Json<SessionCheckRequest>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let header_pass = headers
        .get(ADMIN_PASS_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    let provided = header_pass
        .or_else(|| body.map(|Json(b)| b.password))
        .ok_or_else(|| {
            HttpAppError(AppError::Unauthorized("Missing admin password".to_string()))
        })?;

    if !secure_compare(&provided, &state.config.admin_password) {
        return Err(HttpAppError(AppError::Unauthorized(
            "Invalid admin password".to_string(),
        )));
    }

    Ok((StatusCode::OK, Json(serde_json::json!({ "ok": true }))))
}
