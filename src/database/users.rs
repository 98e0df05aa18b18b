use sqlx::SqlitePool;

use crate::database::manager::StoreError;
use crate::database::models::{NewUser, User};

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<User>, StoreError> {
    let row = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>, StoreError> {
    let row = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, user: &NewUser) -> Result<User, StoreError> {
    let row = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password_hash, email, first_name, last_name, is_staff, is_superuser)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING *",
    )
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(&user.email)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(user.is_staff)
    .bind(user.is_superuser)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Replace the stored credential. Outstanding tokens are untouched; they
/// expire on their own schedule.
pub async fn set_password_hash(
    pool: &SqlitePool,
    id: i64,
    password_hash: &str,
) -> Result<(), StoreError> {
    let result = sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
        .bind(password_hash)
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}
