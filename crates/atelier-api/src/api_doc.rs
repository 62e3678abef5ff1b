//! OpenAPI documentation.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::constants::ADMIN_PASS_HEADER;
use crate::error::ErrorResponse;
use crate::handlers;
use crate::services::{DeleteOutcome, DeleteOutcomeStatus};
use atelier_core::category::Category;
use atelier_core::models::{AssetRecord, MediaKind, ResolvedAsset};

struct AdminPassSecurity;

impl Modify for AdminPassSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_pass",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_PASS_HEADER))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atelier API",
        version = "0.1.0",
        description = "Portfolio gallery backend (v0): asset listing with category resolution, admin upload, and idempotent deletion against a hosted media store. All endpoints are versioned under /api/v0/."
    ),
    paths(
        handlers::health::health_check,
        handlers::assets_list::list_assets,
        handlers::asset_upload::upload_asset,
        handlers::asset_delete::delete_asset,
        handlers::admin_session::check_session,
    ),
    components(schemas(
        ErrorResponse,
        AssetRecord,
        MediaKind,
        ResolvedAsset,
        Category,
        DeleteOutcome,
        DeleteOutcomeStatus,
        handlers::assets_list::ListAssetsResponse,
        handlers::asset_delete::DeleteAssetRequest,
        handlers::admin_session::SessionCheckRequest,
    )),
    modifiers(&AdminPassSecurity),
    tags(
        (name = "health", description = "Liveness"),
        (name = "assets", description = "Gallery listing and admin mutations"),
        (name = "admin", description = "Admin password check")
    )
)]
pub struct ApiDoc;
