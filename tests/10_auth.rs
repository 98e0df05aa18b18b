mod common;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let (app, _pool) = common::test_app().await?;
    let (status, body) = common::request(&app, "GET", "/health", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn login_returns_token_for_valid_credentials() -> Result<()> {
    let (app, pool) = common::test_app().await?;
    common::create_user(&pool, "resident", "s3cret").await?;

    let (status, body) = common::request(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({"username": "resident", "password": "s3cret"})),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body["access"].as_str().is_some());
    // The credential is never echoed back.
    assert!(body.get("password").is_none());
    Ok(())
}

#[tokio::test]
async fn login_rejects_wrong_password_without_token() -> Result<()> {
    let (app, pool) = common::test_app().await?;
    common::create_user(&pool, "resident", "s3cret").await?;

    let (status, body) = common::request(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({"username": "resident", "password": "wrong"})),
    )
    .await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.get("access").is_none());
    assert!(body["error"].as_str().is_some());
    Ok(())
}

#[tokio::test]
async fn login_with_missing_fields_is_a_field_error() -> Result<()> {
    let (app, _pool) = common::test_app().await?;

    let (status, body) = common::request(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({"username": "resident"})),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["password"].as_str().is_some());
    Ok(())
}

#[tokio::test]
async fn malformed_json_body_gets_a_structured_error() -> Result<()> {
    let (app, _pool) = common::test_app().await?;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"), "got {}", content_type);

    let bytes = response.into_body().collect().await?.to_bytes();
    let body: Value = serde_json::from_slice(&bytes)?;
    assert!(body["error"].as_str().is_some(), "body {}", body);
    Ok(())
}

#[tokio::test]
async fn protected_routes_require_a_bearer_token() -> Result<()> {
    let (app, _pool) = common::test_app().await?;

    for path in ["/builders", "/apartments", "/files", "/applications", "/profile"] {
        let (status, _body) = common::request(&app, "GET", path, None, None).await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "path {}", path);
    }
    Ok(())
}

#[tokio::test]
async fn garbage_token_is_rejected() -> Result<()> {
    let (app, _pool) = common::test_app().await?;
    let (status, _body) =
        common::request(&app, "GET", "/builders", Some("not-a-jwt"), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn change_password_with_wrong_old_password_fails_closed() -> Result<()> {
    let (app, pool) = common::test_app().await?;
    common::create_user(&pool, "resident", "original").await?;
    let token = common::login(&app, "resident", "original").await?;

    let (status, body) = common::request(
        &app,
        "POST",
        "/change-password",
        Some(&token),
        Some(json!({"old_password": "wrong", "new_password": "next"})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["old_password"].as_str().is_some());

    // The stored credential is unchanged: the old password still logs in.
    common::login(&app, "resident", "original").await?;
    Ok(())
}

#[tokio::test]
async fn change_password_rotates_the_credential() -> Result<()> {
    let (app, pool) = common::test_app().await?;
    common::create_user(&pool, "resident", "original").await?;
    let token = common::login(&app, "resident", "original").await?;

    let (status, body) = common::request(
        &app,
        "POST",
        "/change-password",
        Some(&token),
        Some(json!({"old_password": "original", "new_password": "rotated"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["detail"].as_str().is_some());

    // New password works, old one does not.
    common::login(&app, "resident", "rotated").await?;
    let (status, _body) = common::request(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({"username": "resident", "password": "original"})),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Previously issued tokens keep working until expiry.
    let (status, _body) = common::request(&app, "GET", "/builders", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}
