//! Admin surface: session check, gated upload and delete, end to end flow.

mod helpers;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use helpers::{api_path, gallery_record, setup_test_app, TEST_ADMIN_PASSWORD};
use serde_json::{json, Value};

fn png_form(category: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("category", category.to_string())
        .add_part(
            "file",
            Part::bytes(b"not-a-real-png".to_vec())
                .file_name("promo.png")
                .mime_type("image/png"),
        )
}

#[tokio::test]
async fn test_session_check_accepts_header() {
    let app = setup_test_app();
    let response = app
        .server
        .post(&api_path("/admin/session"))
        .add_header("x-admin-pass", TEST_ADMIN_PASSWORD)
        .await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_session_check_accepts_json_body() {
    let app = setup_test_app();
    let response = app
        .server
        .post(&api_path("/admin/session"))
        .json(&json!({ "password": TEST_ADMIN_PASSWORD }))
        .await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_session_check_rejects_wrong_password() {
    let app = setup_test_app();
    let response = app
        .server
        .post(&api_path("/admin/session"))
        .add_header("x-admin-pass", "wrong")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = app.server.post(&api_path("/admin/session")).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_requires_admin_password() {
    let app = setup_test_app();
    let response = app
        .server
        .post(&api_path("/assets"))
        .multipart(png_form("flyers"))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.len().await, 0);
}

#[tokio::test]
async fn test_upload_creates_categorized_asset() {
    let app = setup_test_app();
    let response = app
        .server
        .post(&api_path("/assets"))
        .add_header("x-admin-pass", TEST_ADMIN_PASSWORD)
        .multipart(png_form("Flyers"))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["category"], "flyers");
    assert!(body["public_id"]
        .as_str()
        .unwrap()
        .starts_with("portfolio/flyers/"));
    assert!(body["url"].as_str().unwrap().contains("/upload/"));
}

#[tokio::test]
async fn test_upload_without_category_lands_uncategorized() {
    let app = setup_test_app();
    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"clip".to_vec())
            .file_name("clip.mp4")
            .mime_type("video/mp4"),
    );
    let response = app
        .server
        .post(&api_path("/assets"))
        .add_header("x-admin-pass", TEST_ADMIN_PASSWORD)
        .multipart(form)
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["category"], "uncategorized");
    assert_eq!(body["kind"], "video");
}

#[tokio::test]
async fn test_upload_rejects_disallowed_extension() {
    let app = setup_test_app();
    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"#!/bin/sh".to_vec())
            .file_name("script.sh")
            .mime_type("text/x-shellscript"),
    );
    let response = app
        .server
        .post(&api_path("/assets"))
        .add_header("x-admin-pass", TEST_ADMIN_PASSWORD)
        .multipart(form)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.store.len().await, 0);
}

#[tokio::test]
async fn test_upload_rejects_missing_file_part() {
    let app = setup_test_app();
    let form = MultipartForm::new().add_text("category", "flyers");
    let response = app
        .server
        .post(&api_path("/assets"))
        .add_header("x-admin-pass", TEST_ADMIN_PASSWORD)
        .multipart(form)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_requires_admin_password() {
    let app = setup_test_app();
    app.store
        .seed(vec![gallery_record("portfolio/social/a", "social", 1)])
        .await;

    let response = app
        .server
        .delete(&api_path("/assets"))
        .json(&json!({ "public_id": "portfolio/social/a" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_delete_by_url_and_idempotent_retry() {
    let app = setup_test_app();
    let record = gallery_record("portfolio/social/a", "social", 1);
    let url = record.url.clone();
    app.store.seed(vec![record]).await;

    let response = app
        .server
        .delete(&api_path("/assets"))
        .add_header("x-admin-pass", TEST_ADMIN_PASSWORD)
        .json(&json!({ "url": url }))
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["public_id"], "portfolio/social/a");
    assert_eq!(body["status"], "deleted");

    // Second delete of the same asset still succeeds.
    let response = app
        .server
        .delete(&api_path("/assets"))
        .add_header("x-admin-pass", TEST_ADMIN_PASSWORD)
        .json(&json!({ "url": url }))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "already_absent");
}

#[tokio::test]
async fn test_delete_without_identifier_is_rejected() {
    let app = setup_test_app();
    let response = app
        .server
        .delete(&api_path("/assets"))
        .add_header("x-admin-pass", TEST_ADMIN_PASSWORD)
        .json(&json!({}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_list_delete_list_flow() {
    let app = setup_test_app();

    // Upload into two categories.
    for category in ["packaging", "thumbnails"] {
        let response = app
            .server
            .post(&api_path("/assets"))
            .add_header("x-admin-pass", TEST_ADMIN_PASSWORD)
            .multipart(png_form(category))
            .await;
        response.assert_status(StatusCode::CREATED);
    }

    // Both show up, each under its own category.
    let listed: Value = app.server.get(&api_path("/assets")).await.json();
    assert_eq!(listed["total"], 2);

    let packaging: Value = app
        .server
        .get(&api_path("/assets"))
        .add_query_param("category", "packaging")
        .await
        .json();
    assert_eq!(packaging["total"], 1);
    let url = packaging["assets"][0]["url"].as_str().unwrap().to_string();

    // Delete the packaging asset by its delivery URL.
    let response = app
        .server
        .delete(&api_path("/assets"))
        .add_header("x-admin-pass", TEST_ADMIN_PASSWORD)
        .json(&json!({ "url": url }))
        .await;
    response.assert_status(StatusCode::OK);

    // A fresh listing reflects the deletion.
    let listed: Value = app.server.get(&api_path("/assets")).await.json();
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["assets"][0]["category"], "thumbnails");
}
