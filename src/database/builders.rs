//! Builder queries, including the explicit cascade delete.

use sqlx::SqlitePool;

use crate::database::manager::StoreError;
use crate::database::models::{Builder, NewBuilder};

pub async fn list(pool: &SqlitePool) -> Result<Vec<Builder>, StoreError> {
    let rows = sqlx::query_as::<_, Builder>("SELECT * FROM builders ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Builder>, StoreError> {
    let row = sqlx::query_as::<_, Builder>("SELECT * FROM builders WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, builder: &NewBuilder) -> Result<Builder, StoreError> {
    let row = sqlx::query_as::<_, Builder>(
        "INSERT INTO builders (icon, name, contacts, phone_number, site, email)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING *",
    )
    .bind(&builder.icon)
    .bind(&builder.name)
    .bind(&builder.contacts)
    .bind(&builder.phone_number)
    .bind(&builder.site)
    .bind(&builder.email)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    builder: &NewBuilder,
) -> Result<Option<Builder>, StoreError> {
    let row = sqlx::query_as::<_, Builder>(
        "UPDATE builders
         SET icon = ?, name = ?, contacts = ?, phone_number = ?, site = ?, email = ?
         WHERE id = ?
         RETURNING *",
    )
    .bind(&builder.icon)
    .bind(&builder.name)
    .bind(&builder.contacts)
    .bind(&builder.phone_number)
    .bind(&builder.site)
    .bind(&builder.email)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Delete a builder and every apartment that references it, in one
/// transaction. Returns false when the builder did not exist.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, StoreError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM apartments WHERE builder_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM builders WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}

/// Existence check used when validating apartment writes.
pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, StoreError> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM builders WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}
