//! Demo data seeding for local development. Idempotent on users: rerunning
//! keeps existing accounts, but builders and apartments are appended.

use chrono::NaiveDate;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::info;

use crate::auth::password::hash_password;
use crate::database::models::{NewApartment, NewApplication, NewBuilder, NewUser, NewUserProfile};
use crate::database::{apartments, applications, builders, profiles, users};

pub async fn run(pool: &SqlitePool) -> anyhow::Result<()> {
    let admin = ensure_user(pool, "admin", "admin123", true).await?;
    let resident = ensure_user(pool, "resident", "resident123", false).await?;

    if profiles::get_for_user(pool, resident).await?.is_none() {
        profiles::create(
            pool,
            resident,
            &NewUserProfile {
                address: Some("14 Abay Ave".to_string()),
                phone_number: Some("+7 701 000 00 00".to_string()),
                social_categories: Some("large_family".to_string()),
                iin: Some("900101300123".to_string()),
            },
        )
        .await?;
    }

    let acme = builders::create(
        pool,
        &NewBuilder {
            icon: String::new(),
            name: "Acme Development".to_string(),
            contacts: "Head office, 1 Construction Sq".to_string(),
            phone_number: "+7 727 000 11 22".to_string(),
            site: "https://acme.example.com".to_string(),
            email: "sales@acme.example.com".to_string(),
        },
    )
    .await?;

    let towers = apartments::create(
        pool,
        &NewApartment {
            name: "Riverside Towers".to_string(),
            address: "12 Embankment St".to_string(),
            images: vec!["https://cdn.example.com/riverside/1.jpg".to_string()],
            object_code: "RT-01".to_string(),
            floor: 16,
            building_count: 3,
            material: "monolithic".to_string(),
            start_date: date(2024, 3, 1),
            end_date: date(2026, 9, 1),
            available_programs: vec!["7-20-25".to_string(), "military mortgage".to_string()],
            conditions: vec!["installments".to_string()],
            description: "Three monolithic towers on the river embankment".to_string(),
            has_balcony: true,
            is_balcony_glazed: true,
            building_start_date: date(2023, 6, 1),
            home_type: "apartment".to_string(),
            bathroom_type: "separate".to_string(),
            security: "concierge".to_string(),
            parking_type: "underground".to_string(),
            elevator_type: "both".to_string(),
            apartment_types: vec![json!({
                "label": "1BR",
                "rooms": 1,
                "min_area": 38.5,
                "max_area": 42.0,
                "price_per_square": 620000,
                "available_count": 14,
                "scheme_url": "https://cdn.example.com/riverside/1br.png"
            })],
            builder_id: acme.id,
        },
    )
    .await?;

    applications::create(
        pool,
        resident,
        &NewApplication {
            name: "Riverside Towers 1BR".to_string(),
            status: "in_progress".to_string(),
            creation_date: date(2024, 5, 10),
            document_url: String::new(),
        },
    )
    .await?;

    info!(
        "Seeded builder {} with apartment {}; users admin/{} resident/{}",
        acme.name, towers.name, admin, resident
    );
    Ok(())
}

async fn ensure_user(
    pool: &SqlitePool,
    username: &str,
    password: &str,
    is_admin: bool,
) -> anyhow::Result<i64> {
    if let Some(existing) = users::find_by_username(pool, username).await? {
        return Ok(existing.id);
    }
    let user = users::create(
        pool,
        &NewUser {
            username: username.to_string(),
            password_hash: hash_password(password),
            email: format!("{}@example.com", username),
            first_name: String::new(),
            last_name: String::new(),
            is_staff: is_admin,
            is_superuser: is_admin,
        },
    )
    .await?;
    Ok(user.id)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}
