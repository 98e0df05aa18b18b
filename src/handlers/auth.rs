use axum::extract::State;
use axum::response::IntoResponse;
use axum::Extension;
use serde_json::{json, Value};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::{generate_jwt, Claims};
use crate::database::{profiles, users};
use crate::error::ApiError;
use crate::extract::Json;
use crate::middleware::AuthUser;
use crate::serializers::auth::{parse_change_password, parse_login};
use crate::serializers::profile::UserProfileOut;
use crate::AppState;

/// POST /login - verify credentials and issue a bearer token.
///
/// The rejected-credential response is a single top-level message; it never
/// distinguishes "unknown user" from "wrong password".
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let request = parse_login(&payload)?;

    let user = users::find_by_username(&state.pool, &request.username).await?;
    let user = match user {
        Some(user) if verify_password(&request.password, &user.password_hash) => user,
        _ => return Err(ApiError::unauthorized("Invalid credentials")),
    };

    let token = generate_jwt(Claims::new(user.id, user.username.clone()))
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    tracing::info!("User {} logged in", user.username);
    Ok(Json(json!({ "access": token })))
}

/// POST /change-password - requires proof of the current credential.
///
/// On success the old password stops working for future logins; tokens
/// already issued stay valid until their own expiry.
pub async fn change_password(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let request = parse_change_password(&payload)?;

    let user = users::get(&state.pool, caller.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Unknown user"))?;

    if !verify_password(&request.old_password, &user.password_hash) {
        return Err(ApiError::field_error(
            "old_password",
            "Current password is incorrect.",
        ));
    }

    users::set_password_hash(&state.pool, user.id, &hash_password(&request.new_password)).await?;

    tracing::info!("User {} changed password", user.username);
    Ok(Json(json!({ "detail": "Password changed successfully." })))
}

/// GET /profile - the caller's own profile, addressed implicitly. A user
/// without a profile row gets a 404, not a server error.
pub async fn profile(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = users::get(&state.pool, caller.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Unknown user"))?;

    let profile = profiles::get_for_user(&state.pool, user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found."))?;

    Ok(Json(UserProfileOut::from_row(profile, user)))
}
