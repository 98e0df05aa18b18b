use serde::Serialize;

use crate::config;
use crate::database::models::UploadedFile;

/// Read shape for upload records: storage metadata plus the absolute URL the
/// blob can be fetched from.
#[derive(Debug, Serialize)]
pub struct UploadedFileOut {
    pub id: i64,
    pub path: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
    pub file_url: String,
}

impl UploadedFileOut {
    pub fn from_row(file: UploadedFile) -> Self {
        let file_url = absolute_url(&file.path);
        Self {
            id: file.id,
            path: file.path,
            uploaded_at: file.uploaded_at,
            file_url,
        }
    }
}

/// Absolute media URL for a stored path.
pub fn absolute_url(path: &str) -> String {
    let cfg = config::config();
    format!(
        "{}{}/{}",
        cfg.server.base_url.trim_end_matches('/'),
        cfg.storage.media_prefix,
        path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_joins_base_prefix_and_path() {
        let url = absolute_url("uploads/abc.png");
        assert!(url.ends_with("/media/uploads/abc.png"), "got {}", url);
        assert!(url.starts_with("http"));
    }
}
