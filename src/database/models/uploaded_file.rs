use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored-blob record: the storage path plus upload timestamp. Not linked
/// to any other entity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UploadedFile {
    pub id: i64,
    pub path: String,
    pub uploaded_at: DateTime<Utc>,
}
