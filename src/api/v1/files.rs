//! File endpoint handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, FileDeletedResponse, FileResponse, Json};

/// PUT /api/v1/files/{*key}
///
/// Stores the raw body; `Content-Type` is forwarded to the storage backend.
pub async fn upload_file(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<FileResponse>, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    debug!(
        key = %key,
        size = body.len(),
        provider = state.file_storage.provider_name(),
        "Uploading file"
    );

    let url = state.file_storage.upload(&key, body, content_type).await?;

    Ok(Json(FileResponse { key, url }))
}

/// GET /api/v1/files/{*key}
pub async fn get_file(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<FileResponse>, ApiError> {
    let url = state.file_storage.url(&key).await?;

    if !state.file_storage.exists(&key).await {
        return Err(ApiError::not_found(format!("File '{}' not found", key)));
    }

    Ok(Json(FileResponse { key, url }))
}

/// DELETE /api/v1/files/{*key}
pub async fn delete_file(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<FileDeletedResponse>, ApiError> {
    debug!(key = %key, "Deleting file");

    let deleted = state.file_storage.delete(&key).await?;

    Ok(Json(FileDeletedResponse { deleted, key }))
}
