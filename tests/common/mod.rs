//! Shared harness: an in-memory database behind the real router, driven
//! in-process through `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::OnceLock;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use estates_api::auth::password::hash_password;
use estates_api::database::models::NewUser;
use estates_api::database::{manager, users};
use estates_api::{app, AppState};

static UPLOAD_DIR: OnceLock<TempDir> = OnceLock::new();

/// Fresh router over a fresh in-memory database. A single connection keeps
/// the memory database alive and shared for the whole test.
pub async fn test_app() -> Result<(Router, SqlitePool)> {
    // Point uploads at a temp dir before the config singleton initializes.
    UPLOAD_DIR.get_or_init(|| {
        let dir = tempfile::tempdir().expect("tempdir");
        std::env::set_var("UPLOAD_DIR", dir.path());
        dir
    });

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    manager::ensure_schema(&pool).await?;

    Ok((app(AppState { pool: pool.clone() }), pool))
}

pub async fn create_user(pool: &SqlitePool, username: &str, password: &str) -> Result<i64> {
    let user = users::create(
        pool,
        &NewUser {
            username: username.to_string(),
            password_hash: hash_password(password),
            email: format!("{}@example.com", username),
            first_name: String::new(),
            last_name: String::new(),
            is_staff: false,
            is_superuser: false,
        },
    )
    .await?;
    Ok(user.id)
}

/// Login through the real endpoint, returning the bearer token.
pub async fn login(app: &Router, username: &str, password: &str) -> Result<String> {
    let (status, body) = request(
        app,
        "POST",
        "/login",
        None,
        Some(json!({"username": username, "password": password})),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::OK, "login failed: {} {}", status, body);
    Ok(body["access"].as_str().expect("access token").to_string())
}

/// Drive one request through the router and decode the JSON response (Null
/// for empty bodies).
pub async fn request(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };

    Ok((status, value))
}

/// Valid apartment payload referencing the given builder.
pub fn apartment_payload(builder_id: i64) -> Value {
    json!({
        "name": "Riverside Towers",
        "address": "12 Embankment St",
        "images": ["https://cdn.example.com/1.jpg"],
        "object_code": "RT-01",
        "floor": 12,
        "building_count": 3,
        "material": "brick",
        "start_date": "2024-03-01",
        "end_date": "2026-09-01",
        "available_programs": ["mortgage"],
        "conditions": ["installments"],
        "description": "Riverside development",
        "has_balcony": true,
        "is_balcony_glazed": false,
        "building_start_date": "2023-06-01",
        "home_type": "apartment",
        "bathroom_type": "separate",
        "security": "concierge",
        "parking_type": "underground",
        "elevator_type": "both",
        "apartment_types": [{"label": "1BR", "rooms": 1}],
        "builder_id": builder_id,
    })
}

pub fn builder_payload(name: &str) -> Value {
    json!({
        "name": name,
        "contacts": "Head office",
        "phone_number": "+1",
        "email": "a@x.com",
        "site": "",
        "icon": "",
    })
}
