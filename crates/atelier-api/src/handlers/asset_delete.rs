use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::services::DeleteOutcome;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteAssetRequest {
    /// Store identifier; preferred when both are given.
    pub public_id: Option<String>,
    /// Delivery URL; the identifier is derived from it.
    pub url: Option<String>,
}

#[utoipa::path(
    delete,
    path = "/api/v0/assets",
    tag = "assets",
    request_body = DeleteAssetRequest,
    responses(
        (status = 200, description = "Asset deleted or already absent", body = DeleteOutcome),
        (status = 400, description = "No usable identifier in the request", body = ErrorResponse),
        (status = 401, description = "Admin password missing or wrong", body = ErrorResponse),
        (status = 500, description = "Asset store failure", body = ErrorResponse)
    ),
    security(("admin_pass" = []))
)]
#[tracing::instrument(skip(state, request), fields(operation = "delete_asset"))]
pub async fn delete_asset(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<DeleteAssetRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let outcome = state
        .deletion
        .delete(request.public_id, request.url)
        .await
        .map_err(HttpAppError)?;

    tracing::info!(public_id = %outcome.public_id, status = outcome.status.as_str(), "Delete handled");
    Ok(Json(outcome))
}
