//! Application handlers. Every query is scoped to the authenticated caller;
//! another user's application id behaves exactly like a nonexistent one.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Extension;
use serde_json::Value;

use crate::database::applications;
use crate::error::ApiError;
use crate::extract::{Json, Path};
use crate::middleware::AuthUser;
use crate::serializers::application::{self, ApplicationOut};
use crate::AppState;

/// GET /applications
pub async fn list(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = applications::list_for_user(&state.pool, caller.user_id).await?;
    let out: Vec<ApplicationOut> = rows
        .into_iter()
        .map(|row| ApplicationOut::from_row(row, &caller.username))
        .collect();
    Ok(Json(out))
}

/// POST /applications - the owner is always the caller, whatever the payload
/// says.
pub async fn create(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let new = application::parse_create(&payload)?;
    let row = applications::create(&state.pool, caller.user_id, &new).await?;
    let out = ApplicationOut::from_row(row, &caller.username);
    Ok((StatusCode::CREATED, Json(out)))
}

/// GET /applications/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let row = applications::get_for_user(&state.pool, caller.user_id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    Ok(Json(ApplicationOut::from_row(row, &caller.username)))
}

/// PUT /applications/:id - full replacement
pub async fn update(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let new = application::parse_create(&payload)?;
    let row = applications::update_for_user(&state.pool, caller.user_id, id, &new)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    Ok(Json(ApplicationOut::from_row(row, &caller.username)))
}

/// PATCH /applications/:id - partial update
pub async fn patch(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = applications::get_for_user(&state.pool, caller.user_id, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    let new = application::parse_update(&payload, applications::to_new(&existing))?;
    let row = applications::update_for_user(&state.pool, caller.user_id, id, &new)
        .await?
        .ok_or_else(|| ApiError::not_found("Not found."))?;
    Ok(Json(ApplicationOut::from_row(row, &caller.username)))
}

/// DELETE /applications/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !applications::delete_for_user(&state.pool, caller.user_id, id).await? {
        return Err(ApiError::not_found("Not found."));
    }
    Ok(StatusCode::NO_CONTENT)
}
