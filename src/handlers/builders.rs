use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use crate::database::builders;
use crate::error::ApiError;
use crate::extract::{Json, Path};
use crate::AppState;

/// GET /builders
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = builders::list(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /builders
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let new = crate::serializers::builder::parse_create(&payload)?;
    let row = builders::create(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /builders/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let row = builders::get(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    Ok(Json(row))
}

/// PUT /builders/:id - full replacement
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let new = crate::serializers::builder::parse_create(&payload)?;
    let row = builders::update(&state.pool, id, &new)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    Ok(Json(row))
}

/// PATCH /builders/:id - partial update
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = builders::get(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    let new = crate::serializers::builder::parse_update(&payload, &existing)?;
    let row = builders::update(&state.pool, id, &new)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    Ok(Json(row))
}

/// DELETE /builders/:id - cascades to the builder's apartments
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !builders::delete(&state.pool, id).await? {
        return Err(ApiError::not_found("Not found."));
    }
    Ok(StatusCode::NO_CONTENT)
}
