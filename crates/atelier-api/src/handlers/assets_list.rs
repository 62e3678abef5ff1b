use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use atelier_core::{AppError, ResolvedAsset};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListAssetsQuery {
    /// Restrict to one gallery category.
    pub category: Option<String>,
    /// `newest` (default) or `oldest`.
    pub sort: Option<String>,
    /// Cap the number of returned assets.
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListAssetsResponse {
    pub assets: Vec<ResolvedAsset>,
    pub total: usize,
}

#[utoipa::path(
    get,
    path = "/api/v0/assets",
    tag = "assets",
    params(ListAssetsQuery),
    responses(
        (status = 200, description = "Assets listed", body = ListAssetsResponse),
        (status = 400, description = "Invalid query parameter", body = ErrorResponse),
        (status = 500, description = "Asset store failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_assets"))]
pub async fn list_assets(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListAssetsQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let descending = match query.sort.as_deref() {
        None | Some("newest") => true,
        Some("oldest") => false,
        Some(other) => {
            return Err(HttpAppError(AppError::InvalidInput(format!(
                "Unknown sort order: {} (expected newest or oldest)",
                other
            ))));
        }
    };

    let mut assets = state
        .listing
        .list(query.category.as_deref())
        .await
        .map_err(HttpAppError)?;

    // Stable sort; assets without a timestamp sort as oldest.
    let sort_key = |a: &ResolvedAsset| a.record.created_at.map(|t| t.timestamp_millis()).unwrap_or(0);
    if descending {
        assets.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
    } else {
        assets.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    }

    if let Some(limit) = query.limit {
        assets.truncate(limit);
    }

    let total = assets.len();
    Ok(Json(ListAssetsResponse { assets, total }))
}
