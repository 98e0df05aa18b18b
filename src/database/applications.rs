//! Application queries. Every accessor takes the owning user id and scopes
//! the SQL predicate to it, so another user's row produces the same "no row"
//! outcome as a nonexistent id.

use sqlx::SqlitePool;

use crate::database::manager::StoreError;
use crate::database::models::{Application, NewApplication};

pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Application>, StoreError> {
    let rows =
        sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE user_id = ? ORDER BY name")
            .bind(user_id)
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

pub async fn get_for_user(
    pool: &SqlitePool,
    user_id: i64,
    id: i64,
) -> Result<Option<Application>, StoreError> {
    let row =
        sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    Ok(row)
}

pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    application: &NewApplication,
) -> Result<Application, StoreError> {
    let row = sqlx::query_as::<_, Application>(
        "INSERT INTO applications (user_id, name, status, creation_date, document_url)
         VALUES (?, ?, ?, ?, ?)
         RETURNING *",
    )
    .bind(user_id)
    .bind(&application.name)
    .bind(&application.status)
    .bind(application.creation_date)
    .bind(&application.document_url)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update_for_user(
    pool: &SqlitePool,
    user_id: i64,
    id: i64,
    application: &NewApplication,
) -> Result<Option<Application>, StoreError> {
    let row = sqlx::query_as::<_, Application>(
        "UPDATE applications
         SET name = ?, status = ?, creation_date = ?, document_url = ?
         WHERE id = ? AND user_id = ?
         RETURNING *",
    )
    .bind(&application.name)
    .bind(&application.status)
    .bind(application.creation_date)
    .bind(&application.document_url)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete_for_user(pool: &SqlitePool, user_id: i64, id: i64) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM applications WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub fn to_new(application: &Application) -> NewApplication {
    NewApplication {
        name: application.name.clone(),
        status: application.status.clone(),
        creation_date: application.creation_date,
        document_url: application.document_url.clone(),
    }
}
