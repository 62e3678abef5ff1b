//! Test helpers: build AppState and router over an in-memory store.
//!
//! Run from workspace root: `cargo test -p atelier-api`.

use std::sync::Arc;

use atelier_api::constants;
use atelier_api::setup::routes;
use atelier_api::state::AppState;
use atelier_core::{AssetRecord, CloudinaryCredentials, Config, MediaKind, StoreBackend};
use atelier_store::MemoryStore;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};

pub const TEST_ADMIN_PASSWORD: &str = "correct-horse-battery";

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        admin_password: TEST_ADMIN_PASSWORD.to_string(),
        store_backend: StoreBackend::Memory,
        cloudinary: None::<CloudinaryCredentials>,
        strict_category_labels: false,
        max_upload_size_bytes: 10 * 1024 * 1024,
        allowed_image_extensions: vec![
            "jpg".to_string(),
            "jpeg".to_string(),
            "png".to_string(),
            "gif".to_string(),
            "webp".to_string(),
        ],
        allowed_video_extensions: vec!["mp4".to_string(), "webm".to_string(), "mov".to_string()],
        search_max_results: 500,
    }
}

/// Test application: server plus direct store access for seeding.
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryStore>,
}

pub fn setup_test_app() -> TestApp {
    let config = test_config();
    let store = Arc::new(MemoryStore::new());
    let state = Arc::new(AppState::new(config.clone(), store.clone()));
    let router = routes::setup_routes(&config, state).expect("router setup");
    let server = TestServer::new(router).expect("test server");
    TestApp { server, store }
}

/// Asset record shaped like a store search result, with metadata the
/// category chain can work from.
pub fn gallery_record(public_id: &str, category: &str, day: u32) -> AssetRecord {
    AssetRecord {
        public_id: public_id.to_string(),
        url: format!("https://assets.example/image/upload/v1/{}.jpg", public_id),
        folder: Some(format!("portfolio/{}", category)),
        context_category: None,
        tags: Some(vec!["portfolio".to_string(), category.to_string()]),
        created_at: Some(Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()),
        kind: Some(MediaKind::Image),
        format: Some("jpg".to_string()),
        width: Some(1200),
        height: Some(800),
    }
}
