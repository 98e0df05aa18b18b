use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's purchase application. Always owned by exactly one user; every
/// query is scoped to the owner so foreign rows are indistinguishable from
/// missing ones.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub status: String,
    pub creation_date: NaiveDate,
    pub document_url: String,
}

/// Validated application fields. The owner is never part of this record; it
/// is supplied by the handler from the authenticated caller.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub name: String,
    pub status: String,
    pub creation_date: NaiveDate,
    pub document_url: String,
}
