use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Optional per-user profile, at most one per user. Profiles are not
/// auto-created; a user without one is an expected state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub user_id: i64,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub social_categories: Option<String>,
    pub iin: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewUserProfile {
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub social_categories: Option<String>,
    pub iin: Option<String>,
}
