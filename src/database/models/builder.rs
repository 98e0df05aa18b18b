use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A development company. Owns zero or more apartments; deleting a builder
/// removes its apartments as well.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Builder {
    pub id: i64,
    pub icon: String,
    pub name: String,
    pub contacts: String,
    pub phone_number: String,
    pub site: String,
    pub email: String,
}

/// Validated builder fields ready for insert or full update.
#[derive(Debug, Clone)]
pub struct NewBuilder {
    pub icon: String,
    pub name: String,
    pub contacts: String,
    pub phone_number: String,
    pub site: String,
    pub email: String,
}
