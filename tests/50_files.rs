mod common;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

const BOUNDARY: &str = "estates-test-boundary";

fn multipart_request(field_name: &str, filename: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field_name, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> Result<Value> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn upload_stores_the_blob_and_answers_with_url_and_path() -> Result<()> {
    let (app, _pool) = common::test_app().await?;

    let response = app
        .clone()
        .oneshot(multipart_request("file", "plan.png", b"png-bytes"))
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await?;

    let path = body["path"].as_str().expect("path").to_string();
    assert!(path.ends_with(".png"));
    let file_url = body["file_url"].as_str().expect("file_url");
    assert!(file_url.starts_with("http"), "got {}", file_url);
    assert!(file_url.ends_with(&path));

    // The stored blob is URL-addressable through the media route.
    let media = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/media/{}", path))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(media.status(), StatusCode::OK);
    let bytes = media.into_body().collect().await?.to_bytes();
    assert_eq!(&bytes[..], b"png-bytes");
    Ok(())
}

#[tokio::test]
async fn upload_without_a_file_part_is_a_client_error() -> Result<()> {
    let (app, _pool) = common::test_app().await?;

    let response = app
        .clone()
        .oneshot(multipart_request("attachment", "plan.png", b"png-bytes"))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await?;
    assert!(body["error"].as_str().is_some());
    Ok(())
}

#[tokio::test]
async fn upload_is_open_but_files_crud_requires_auth() -> Result<()> {
    let (app, pool) = common::test_app().await?;

    // No token on the upload - accepted by design.
    let response = app
        .clone()
        .oneshot(multipart_request("file", "open.bin", b"data"))
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The record CRUD stays behind auth.
    let (status, _) = common::request(&app, "GET", "/files", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    common::create_user(&pool, "agent", "pw").await?;
    let token = common::login(&app, "agent", "pw").await?;
    let (status, listed) = common::request(&app, "GET", "/files", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(|a| a.len()), Some(1));
    assert!(listed[0]["file_url"].as_str().is_some());
    Ok(())
}

#[tokio::test]
async fn file_records_support_crud() -> Result<()> {
    let (app, pool) = common::test_app().await?;
    common::create_user(&pool, "agent", "pw").await?;
    let token = common::login(&app, "agent", "pw").await?;

    let (status, created) = common::request(
        &app,
        "POST",
        "/files",
        Some(&token),
        Some(json!({"path": "brochure.pdf"})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("id");
    assert!(created["uploaded_at"].as_str().is_some());

    let (status, updated) = common::request(
        &app,
        "PUT",
        &format!("/files/{}", id),
        Some(&token),
        Some(json!({"path": "brochure-v2.pdf"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["path"], "brochure-v2.pdf");

    let (status, _) =
        common::request(&app, "DELETE", &format!("/files/{}", id), Some(&token), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) =
        common::request(&app, "GET", &format!("/files/{}", id), Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn file_record_patch_keeps_an_absent_path() -> Result<()> {
    let (app, pool) = common::test_app().await?;
    common::create_user(&pool, "agent", "pw").await?;
    let token = common::login(&app, "agent", "pw").await?;

    let (_, created) = common::request(
        &app,
        "POST",
        "/files",
        Some(&token),
        Some(json!({"path": "brochure.pdf"})),
    )
    .await?;
    let id = created["id"].as_i64().expect("id");

    // An empty PATCH is a no-op, not a missing-field error.
    let (status, patched) = common::request(
        &app,
        "PATCH",
        &format!("/files/{}", id),
        Some(&token),
        Some(json!({})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["path"], "brochure.pdf");

    let (status, patched) = common::request(
        &app,
        "PATCH",
        &format!("/files/{}", id),
        Some(&token),
        Some(json!({"path": "brochure-v2.pdf"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["path"], "brochure-v2.pdf");
    Ok(())
}

#[tokio::test]
async fn file_record_create_requires_a_path() -> Result<()> {
    let (app, pool) = common::test_app().await?;
    common::create_user(&pool, "agent", "pw").await?;
    let token = common::login(&app, "agent", "pw").await?;

    let (status, body) =
        common::request(&app, "POST", "/files", Some(&token), Some(json!({}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["path"].as_str().is_some());
    Ok(())
}
