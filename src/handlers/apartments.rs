use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::database::models::{Apartment, NewApartment};
use crate::database::{apartments, builders};
use crate::error::ApiError;
use crate::extract::{Json, Path};
use crate::serializers::apartment::{self, ApartmentOut};
use crate::AppState;

/// The builder reference is validated against the store before any write, so
/// a dangling `builder_id` is a field error rather than a constraint failure.
async fn check_builder_reference(pool: &SqlitePool, builder_id: i64) -> Result<(), ApiError> {
    if builders::exists(pool, builder_id).await? {
        Ok(())
    } else {
        Err(ApiError::field_error(
            "builder_id",
            format!("Invalid pk \"{}\" - object does not exist.", builder_id),
        ))
    }
}

/// Expand a row into the read shape with the nested builder object.
async fn to_out(pool: &SqlitePool, row: Apartment) -> Result<ApartmentOut, ApiError> {
    let builder = builders::get(pool, row.builder_id)
        .await?
        .ok_or_else(|| ApiError::internal_server_error("Dangling builder reference"))?;
    Ok(ApartmentOut::from_row(row, builder))
}

/// GET /apartments
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = apartments::list(&state.pool).await?;
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        out.push(to_out(&state.pool, row).await?);
    }
    Ok(Json(out))
}

/// POST /apartments
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let new: NewApartment = apartment::parse_create(&payload)?;
    check_builder_reference(&state.pool, new.builder_id).await?;
    let row = apartments::create(&state.pool, &new).await?;
    let out = to_out(&state.pool, row).await?;
    Ok((StatusCode::CREATED, Json(out)))
}

/// GET /apartments/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let row = apartments::get(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    let out = to_out(&state.pool, row).await?;
    Ok(Json(out))
}

/// PUT /apartments/:id - full replacement
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let new = apartment::parse_create(&payload)?;
    check_builder_reference(&state.pool, new.builder_id).await?;
    let row = apartments::update(&state.pool, id, &new)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    let out = to_out(&state.pool, row).await?;
    Ok(Json(out))
}

/// PATCH /apartments/:id - partial update
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = apartments::get(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    let new = apartment::parse_update(&payload, apartments::to_new(&existing))?;
    check_builder_reference(&state.pool, new.builder_id).await?;
    let row = apartments::update(&state.pool, id, &new)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    let out = to_out(&state.pool, row).await?;
    Ok(Json(out))
}

/// DELETE /apartments/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !apartments::delete(&state.pool, id).await? {
        return Err(ApiError::not_found("Not found."));
    }
    Ok(StatusCode::NO_CONTENT)
}
