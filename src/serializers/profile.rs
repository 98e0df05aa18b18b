use serde::Serialize;

use crate::database::models::{User, UserProfile};

/// Subset of identity fields exposed through the profile endpoint. Credential
/// material never appears here.
#[derive(Debug, Serialize)]
pub struct NestedUserOut {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize)]
pub struct UserProfileOut {
    pub id: i64,
    pub user: NestedUserOut,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub social_categories: Option<String>,
    pub iin: Option<String>,
}

impl UserProfileOut {
    pub fn from_row(profile: UserProfile, user: User) -> Self {
        Self {
            id: profile.id,
            user: NestedUserOut {
                id: user.id,
                username: user.username,
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
            },
            address: profile.address,
            phone_number: profile.phone_number,
            social_categories: profile.social_categories,
            iin: profile.iin,
        }
    }
}
