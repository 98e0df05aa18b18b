//! Upload-record CRUD plus the two blob endpoints: the open multipart upload
//! and URL-addressable retrieval of stored files.

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::config;
use crate::database::files;
use crate::error::ApiError;
use crate::extract::{Json, Path};
use crate::serializers::fields::Extractor;
use crate::serializers::file::{absolute_url, UploadedFileOut};
use crate::AppState;

/// GET /files
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = files::list(&state.pool).await?;
    let out: Vec<UploadedFileOut> = rows.into_iter().map(UploadedFileOut::from_row).collect();
    Ok(Json(out))
}

/// POST /files - register an upload record by path
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let path = parse_path(&payload)?;
    let row = files::create(&state.pool, &path).await?;
    Ok((StatusCode::CREATED, Json(UploadedFileOut::from_row(row))))
}

/// GET /files/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let row = files::get(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    Ok(Json(UploadedFileOut::from_row(row)))
}

/// PUT /files/:id - full replacement
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let path = parse_path(&payload)?;
    let row = files::update(&state.pool, id, &path)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    Ok(Json(UploadedFileOut::from_row(row)))
}

/// PATCH /files/:id - partial update; an absent path keeps the stored value
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = files::get(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;

    let mut ex = Extractor::new(&payload)?;
    let path = ex.string("path");
    ex.finish()?;
    let path = path.unwrap_or(existing.path);

    let row = files::update(&state.pool, id, &path)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    Ok(Json(UploadedFileOut::from_row(row)))
}

/// DELETE /files/:id - removes the record only; the blob stays addressable
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !files::delete(&state.pool, id).await? {
        return Err(ApiError::not_found("Not found."));
    }
    Ok(StatusCode::NO_CONTENT)
}

fn parse_path(payload: &Value) -> Result<String, ApiError> {
    let mut ex = Extractor::new(payload)?;
    let path = ex.string("path");
    let path = ex.require("path", path);
    ex.finish()?;
    Ok(path.unwrap_or_default())
}

/// POST /upload - open multipart endpoint.
///
/// Accepts exactly one binary part named `file`, stores it under a fresh
/// name, records it, and answers with the absolute URL and storage path.
/// A request without that part is a client error, never a server error.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut stored: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read file part: {}", e)))?;

        let extension = std::path::Path::new(&original_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");
        let filename = format!("{}.{}", Uuid::new_v4(), extension);

        stored = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) = stored.ok_or_else(|| ApiError::bad_request("No file was submitted"))?;

    let upload_dir = &config::config().storage.upload_dir;
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Storage error: {}", e)))?;
    let disk_path = std::path::Path::new(upload_dir).join(&filename);
    tokio::fs::write(&disk_path, &data)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Storage error: {}", e)))?;

    let row = files::create(&state.pool, &filename).await?;
    tracing::info!("Stored upload {} ({} bytes)", row.path, data.len());

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "file_url": absolute_url(&row.path),
            "path": row.path,
        })),
    ))
}

/// GET /media/*path - serve a stored blob
pub async fn media(Path(path): Path<String>) -> Result<impl IntoResponse, ApiError> {
    // No traversal out of the blob store directory.
    if path.contains("..") || path.starts_with('/') {
        return Err(ApiError::not_found("Not found."));
    }

    let disk_path = std::path::Path::new(&config::config().storage.upload_dir).join(&path);
    match tokio::fs::read(&disk_path).await {
        Ok(bytes) => Ok((
            [(header::CONTENT_TYPE, "application/octet-stream")],
            bytes,
        )),
        Err(_) => Err(ApiError::not_found("Not found.")),
    }
}
