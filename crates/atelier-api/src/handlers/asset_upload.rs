use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use atelier_core::{resolve_category, AppError, Category, ResolvedAsset};

struct UploadParts {
    data: Bytes,
    filename: String,
    content_type: String,
    category: Category,
}

async fn read_multipart(
    mut multipart: Multipart,
    state: &AppState,
) -> Result<UploadParts, AppError> {
    let mut file: Option<(Bytes, String, String)> = None;
    let mut category: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        match field.name() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::InvalidInput("File part is missing a filename".to_string())
                    })?
                    .to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read file part: {}", e))
                })?;
                file = Some((data, filename, content_type));
            }
            Some("category") => {
                let value = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read category field: {}", e))
                })?;
                category = Some(value);
            }
            _ => {}
        }
    }

    let (data, filename, content_type) =
        file.ok_or_else(|| AppError::InvalidInput("Missing file part".to_string()))?;

    if data.is_empty() {
        return Err(AppError::InvalidInput("File is empty".to_string()));
    }
    if data.len() > state.config.max_upload_size_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "{} bytes exceeds max {} bytes",
            data.len(),
            state.config.max_upload_size_bytes
        )));
    }

    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    let allowed = state
        .config
        .allowed_image_extensions
        .iter()
        .chain(state.config.allowed_video_extensions.iter())
        .any(|e| e == &extension);
    if !allowed {
        return Err(AppError::InvalidInput(format!(
            "File extension not allowed: {:?}",
            extension
        )));
    }

    Ok(UploadParts {
        data,
        filename,
        content_type,
        category: Category::new(category.as_deref().unwrap_or("")),
    })
}

#[utoipa::path(
    post,
    path = "/api/v0/assets",
    tag = "assets",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Asset uploaded", body = ResolvedAsset),
        (status = 400, description = "Missing file or disallowed extension", body = ErrorResponse),
        (status = 401, description = "Admin password missing or wrong", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Asset store failure", body = ErrorResponse)
    ),
    security(("admin_pass" = []))
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_asset"))]
pub async fn upload_asset(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let parts = read_multipart(multipart, &state).await.map_err(HttpAppError)?;

    tracing::info!(
        filename = %parts.filename,
        category = %parts.category,
        size = parts.data.len(),
        "Uploading asset"
    );

    let record = state
        .store
        .upload(
            parts.data,
            &parts.filename,
            &parts.content_type,
            &parts.category,
        )
        .await
        .map_err(HttpAppError::from)?;

    let category = resolve_category(&record, state.config.label_policy());
    Ok((
        StatusCode::CREATED,
        Json(ResolvedAsset { record, category }),
    ))
}
