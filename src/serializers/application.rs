use serde::Serialize;
use serde_json::Value;

use crate::database::models::{Application, NewApplication};
use crate::error::ApiError;
use crate::serializers::choices;
use crate::serializers::fields::Extractor;

/// Read shape. The owner appears as a username, never as a mutable field;
/// writes that carry a `user` value have it ignored in favor of the caller.
#[derive(Debug, Serialize)]
pub struct ApplicationOut {
    pub id: i64,
    pub user: String,
    pub name: String,
    pub status: String,
    pub creation_date: chrono::NaiveDate,
    pub document_url: String,
}

impl ApplicationOut {
    pub fn from_row(application: Application, username: &str) -> Self {
        Self {
            id: application.id,
            user: username.to_string(),
            name: application.name,
            status: application.status,
            creation_date: application.creation_date,
            document_url: application.document_url,
        }
    }
}

pub fn parse_create(value: &Value) -> Result<NewApplication, ApiError> {
    let mut ex = Extractor::new(value)?;

    let name = ex.string("name");
    let name = ex.require("name", name);
    let status = ex.choice("status", choices::APPLICATION_STATUS);
    let status = ex.require("status", status);
    let creation_date = ex.date("creation_date");
    let creation_date = ex.require("creation_date", creation_date);
    let document_url = ex.url("document_url");

    ex.finish()?;

    Ok(NewApplication {
        name: name.unwrap_or_default(),
        status: status.unwrap_or_default(),
        creation_date: creation_date.unwrap_or_default(),
        document_url: document_url.unwrap_or_default(),
    })
}

pub fn parse_update(value: &Value, base: NewApplication) -> Result<NewApplication, ApiError> {
    let mut ex = Extractor::new(value)?;

    let name = ex.string("name");
    let status = ex.choice("status", choices::APPLICATION_STATUS);
    let creation_date = ex.date("creation_date");
    let document_url = ex.url("document_url");

    ex.finish()?;

    Ok(NewApplication {
        name: name.unwrap_or(base.name),
        status: status.unwrap_or(base.status),
        creation_date: creation_date.unwrap_or(base.creation_date),
        document_url: document_url.unwrap_or(base.document_url),
    })
}
