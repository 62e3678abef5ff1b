//! Route configuration and setup

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api_doc::ApiDoc;
use crate::auth::{admin_auth_middleware, AdminAuthState};
use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use atelier_core::Config;

// Multipart framing overhead on top of the configured file size cap.
const BODY_LIMIT_SLACK: usize = 1024 * 1024;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;
    let auth_state = Arc::new(AdminAuthState {
        admin_password: config.admin_password.clone(),
    });

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            &format!("{}/assets", API_PREFIX),
            get(handlers::assets_list::list_assets),
        )
        .route(
            &format!("{}/admin/session", API_PREFIX),
            post(handlers::admin_session::check_session),
        );

    // Protected routes (require the admin password header)
    let protected_routes = Router::new()
        .route(
            &format!("{}/assets", API_PREFIX),
            post(handlers::asset_upload::upload_asset),
        )
        .route(
            &format!("{}/assets", API_PREFIX),
            delete(handlers::asset_delete::delete_asset),
        )
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            admin_auth_middleware,
        ));

    let body_limit = config.max_upload_size_bytes + BODY_LIMIT_SLACK;

    let app = public_routes
        .merge(protected_routes)
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();

        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
