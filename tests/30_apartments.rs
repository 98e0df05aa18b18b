mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

async fn setup() -> Result<(axum::Router, String, i64)> {
    let (app, pool) = common::test_app().await?;
    common::create_user(&pool, "agent", "pw").await?;
    let token = common::login(&app, "agent", "pw").await?;
    let (_, builder) = common::request(
        &app,
        "POST",
        "/builders",
        Some(&token),
        Some(common::builder_payload("Acme")),
    )
    .await?;
    let builder_id = builder["id"].as_i64().expect("id");
    Ok((app, token, builder_id))
}

#[tokio::test]
async fn create_then_read_returns_nested_builder() -> Result<()> {
    let (app, token, builder_id) = setup().await?;

    let (status, created) = common::request(
        &app,
        "POST",
        "/apartments",
        Some(&token),
        Some(common::apartment_payload(builder_id)),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("id");

    let (status, fetched) =
        common::request(&app, "GET", &format!("/apartments/{}", id), Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);

    // Write takes builder_id; read expands it into the nested builder.
    assert!(fetched.get("builder_id").is_none());
    assert_eq!(fetched["builder"]["id"].as_i64(), Some(builder_id));
    assert_eq!(fetched["builder"]["name"], "Acme");
    assert_eq!(fetched["builder"]["email"], "a@x.com");
    assert_eq!(fetched["material"], "brick");
    assert_eq!(fetched["start_date"], "2024-03-01");
    assert_eq!(fetched["apartment_types"][0]["label"], "1BR");
    Ok(())
}

#[tokio::test]
async fn out_of_enum_values_are_rejected_and_nothing_is_written() -> Result<()> {
    let (app, token, builder_id) = setup().await?;

    for (field, value) in [
        ("material", "wood"),
        ("home_type", "castle"),
        ("security", "moat"),
        ("parking_type", "street"),
        ("elevator_type", "paternoster"),
    ] {
        let mut payload = common::apartment_payload(builder_id);
        payload[field] = json!(value);
        let (status, body) =
            common::request(&app, "POST", "/apartments", Some(&token), Some(payload)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field {}", field);
        assert!(
            body["field_errors"][field].as_str().is_some(),
            "field {} body {}",
            field,
            body
        );
    }

    let (_, listed) = common::request(&app, "GET", "/apartments", Some(&token), None).await?;
    assert_eq!(listed.as_array().map(|a| a.len()), Some(0));
    Ok(())
}

#[tokio::test]
async fn malformed_date_is_a_field_error() -> Result<()> {
    let (app, token, builder_id) = setup().await?;

    let mut payload = common::apartment_payload(builder_id);
    payload["start_date"] = json!("March 2024");
    let (status, body) =
        common::request(&app, "POST", "/apartments", Some(&token), Some(payload)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["start_date"].as_str().is_some());
    Ok(())
}

#[tokio::test]
async fn dangling_builder_reference_is_a_field_error() -> Result<()> {
    let (app, token, _builder_id) = setup().await?;

    let (status, body) = common::request(
        &app,
        "POST",
        "/apartments",
        Some(&token),
        Some(common::apartment_payload(424242)),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["builder_id"].as_str().is_some());
    Ok(())
}

#[tokio::test]
async fn patch_updates_only_supplied_fields() -> Result<()> {
    let (app, token, builder_id) = setup().await?;

    let (_, created) = common::request(
        &app,
        "POST",
        "/apartments",
        Some(&token),
        Some(common::apartment_payload(builder_id)),
    )
    .await?;
    let id = created["id"].as_i64().expect("id");

    let (status, patched) = common::request(
        &app,
        "PATCH",
        &format!("/apartments/{}", id),
        Some(&token),
        Some(json!({"floor": 20, "material": "panel"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["floor"].as_i64(), Some(20));
    assert_eq!(patched["material"], "panel");
    assert_eq!(patched["name"], "Riverside Towers");
    Ok(())
}

#[tokio::test]
async fn delete_removes_the_row() -> Result<()> {
    let (app, token, builder_id) = setup().await?;

    let (_, created) = common::request(
        &app,
        "POST",
        "/apartments",
        Some(&token),
        Some(common::apartment_payload(builder_id)),
    )
    .await?;
    let id = created["id"].as_i64().expect("id");

    let (status, _) = common::request(
        &app,
        "DELETE",
        &format!("/apartments/{}", id),
        Some(&token),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) =
        common::request(&app, "GET", &format!("/apartments/{}", id), Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
