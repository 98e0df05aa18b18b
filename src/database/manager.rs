use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tracing::info;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Open the database pool, creating the file when missing.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(|e| StoreError::InvalidDatabaseUrl(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!("Opened database pool for {}", url);
    Ok(pool)
}

/// Idempotent schema setup. One table per entity; the schemaless list fields
/// on apartments persist as JSON text and are opaque to the storage layer.
/// Cascade behavior is an explicit operation in the query modules rather than
/// an ON DELETE clause, so it stays visible and testable.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        email TEXT NOT NULL DEFAULT '',
        first_name TEXT NOT NULL DEFAULT '',
        last_name TEXT NOT NULL DEFAULT '',
        is_staff INTEGER NOT NULL DEFAULT 0,
        is_superuser INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS builders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        icon TEXT NOT NULL DEFAULT '',
        name TEXT NOT NULL,
        contacts TEXT NOT NULL DEFAULT '',
        phone_number TEXT NOT NULL DEFAULT '',
        site TEXT NOT NULL DEFAULT '',
        email TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS apartments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL,
        images TEXT NOT NULL DEFAULT '[]',
        object_code TEXT NOT NULL,
        floor INTEGER NOT NULL,
        building_count INTEGER NOT NULL,
        material TEXT NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        available_programs TEXT NOT NULL DEFAULT '[]',
        conditions TEXT NOT NULL DEFAULT '[]',
        description TEXT NOT NULL,
        has_balcony INTEGER NOT NULL DEFAULT 0,
        is_balcony_glazed INTEGER NOT NULL DEFAULT 0,
        building_start_date TEXT NOT NULL,
        home_type TEXT NOT NULL,
        bathroom_type TEXT NOT NULL,
        security TEXT NOT NULL,
        parking_type TEXT NOT NULL,
        elevator_type TEXT NOT NULL,
        apartment_types TEXT NOT NULL DEFAULT '[]',
        builder_id INTEGER NOT NULL REFERENCES builders(id)
    )",
    "CREATE TABLE IF NOT EXISTS uploaded_files (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        path TEXT NOT NULL,
        uploaded_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS applications (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        name TEXT NOT NULL,
        status TEXT NOT NULL,
        creation_date TEXT NOT NULL,
        document_url TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE IF NOT EXISTS user_profiles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL UNIQUE REFERENCES users(id),
        address TEXT,
        phone_number TEXT,
        social_categories TEXT,
        iin TEXT
    )",
];

pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
