use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::database::manager::StoreError;
use crate::database::models::UploadedFile;

pub async fn list(pool: &SqlitePool) -> Result<Vec<UploadedFile>, StoreError> {
    let rows =
        sqlx::query_as::<_, UploadedFile>("SELECT * FROM uploaded_files ORDER BY uploaded_at DESC")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<UploadedFile>, StoreError> {
    let row = sqlx::query_as::<_, UploadedFile>("SELECT * FROM uploaded_files WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, path: &str) -> Result<UploadedFile, StoreError> {
    let now: DateTime<Utc> = Utc::now();
    let row = sqlx::query_as::<_, UploadedFile>(
        "INSERT INTO uploaded_files (path, uploaded_at) VALUES (?, ?) RETURNING *",
    )
    .bind(path)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    path: &str,
) -> Result<Option<UploadedFile>, StoreError> {
    let row = sqlx::query_as::<_, UploadedFile>(
        "UPDATE uploaded_files SET path = ? WHERE id = ? RETURNING *",
    )
    .bind(path)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM uploaded_files WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
