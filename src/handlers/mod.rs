pub mod apartments;
pub mod applications;
pub mod auth;
pub mod builders;
pub mod files;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde_json::json;

use crate::AppState;

pub async fn root() -> Json<serde_json::Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Estates API",
        "version": version,
        "endpoints": {
            "login": "POST /login (public)",
            "upload": "POST /upload (public)",
            "apartments": "/apartments[/:id] (protected)",
            "builders": "/builders[/:id] (protected)",
            "files": "/files[/:id] (protected)",
            "applications": "/applications[/:id] (protected)",
            "profile": "GET /profile (protected)",
            "change_password": "POST /change-password (protected)",
        }
    }))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
