use sqlx::SqlitePool;

use crate::database::manager::StoreError;
use crate::database::models::{NewUserProfile, UserProfile};

/// Profiles are addressed implicitly through the owning user. Absence is an
/// expected state, hence the Option.
pub async fn get_for_user(pool: &SqlitePool, user_id: i64) -> Result<Option<UserProfile>, StoreError> {
    let row = sqlx::query_as::<_, UserProfile>("SELECT * FROM user_profiles WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    profile: &NewUserProfile,
) -> Result<UserProfile, StoreError> {
    let row = sqlx::query_as::<_, UserProfile>(
        "INSERT INTO user_profiles (user_id, address, phone_number, social_categories, iin)
         VALUES (?, ?, ?, ?, ?)
         RETURNING *",
    )
    .bind(user_id)
    .bind(&profile.address)
    .bind(&profile.phone_number)
    .bind(&profile.social_categories)
    .bind(&profile.iin)
    .fetch_one(pool)
    .await?;
    Ok(row)
}
