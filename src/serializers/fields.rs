//! Field extraction helpers shared by the payload parsers.
//!
//! An [`Extractor`] walks a JSON object, pulling typed values out field by
//! field and accumulating per-field error messages as it goes. Absent and
//! `null` fields yield `None` so the same extractor serves both full writes
//! (where `require` turns `None` into an error) and partial PATCH merges
//! (where `None` keeps the stored value).

use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::ApiError;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_DATE: &str = "Date has wrong format. Use this format instead: YYYY-MM-DD.";

pub struct Extractor<'a> {
    object: &'a Map<String, Value>,
    errors: HashMap<String, String>,
}

impl<'a> Extractor<'a> {
    pub fn new(value: &'a Value) -> Result<Self, ApiError> {
        match value.as_object() {
            Some(object) => Ok(Self {
                object,
                errors: HashMap::new(),
            }),
            None => Err(ApiError::bad_request("Expected a JSON object")),
        }
    }

    fn raw(&self, field: &str) -> Option<&'a Value> {
        match self.object.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub fn error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn string(&mut self, field: &str) -> Option<String> {
        match self.raw(field) {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.error(field, "Not a valid string.");
                None
            }
        }
    }

    pub fn integer(&mut self, field: &str) -> Option<i64> {
        match self.raw(field) {
            None => None,
            Some(value) => match value.as_i64() {
                Some(n) => Some(n),
                None => {
                    self.error(field, "A valid integer is required.");
                    None
                }
            },
        }
    }

    /// Non-negative integer, for count-like fields.
    pub fn unsigned(&mut self, field: &str) -> Option<i64> {
        match self.integer(field) {
            Some(n) if n < 0 => {
                self.error(field, "Ensure this value is greater than or equal to 0.");
                None
            }
            other => other,
        }
    }

    pub fn boolean(&mut self, field: &str) -> Option<bool> {
        match self.raw(field) {
            None => None,
            Some(Value::Bool(b)) => Some(*b),
            Some(_) => {
                self.error(field, "Must be a valid boolean.");
                None
            }
        }
    }

    pub fn date(&mut self, field: &str) -> Option<NaiveDate> {
        let raw = self.string(field)?;
        match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.error(field, INVALID_DATE);
                None
            }
        }
    }

    /// Member of a closed vocabulary.
    pub fn choice(&mut self, field: &str, allowed: &[&str]) -> Option<String> {
        let value = self.string(field)?;
        if allowed.contains(&value.as_str()) {
            Some(value)
        } else {
            self.error(field, format!("\"{}\" is not a valid choice.", value));
            None
        }
    }

    /// Optional URL field: empty strings pass through (meaning "unset"),
    /// anything else must parse as an absolute URL.
    pub fn url(&mut self, field: &str) -> Option<String> {
        let value = self.string(field)?;
        if value.is_empty() || url::Url::parse(&value).is_ok() {
            Some(value)
        } else {
            self.error(field, "Enter a valid URL.");
            None
        }
    }

    pub fn email(&mut self, field: &str) -> Option<String> {
        let value = self.string(field)?;
        if is_valid_email(&value) {
            Some(value)
        } else {
            self.error(field, "Enter a valid email address.");
            None
        }
    }

    pub fn string_list(&mut self, field: &str) -> Option<Vec<String>> {
        match self.raw(field) {
            None => None,
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(s) => out.push(s.to_string()),
                        None => {
                            self.error(field, "Expected a list of strings.");
                            return None;
                        }
                    }
                }
                Some(out)
            }
            Some(_) => {
                self.error(field, "Expected a list of strings.");
                None
            }
        }
    }

    /// A JSON array whose entries are deliberately schema-light.
    pub fn value_list(&mut self, field: &str) -> Option<Vec<Value>> {
        match self.raw(field) {
            None => None,
            Some(Value::Array(items)) => Some(items.clone()),
            Some(_) => {
                self.error(field, "Expected a list.");
                None
            }
        }
    }

    /// Turn an absent value into a "required" error, unless the field already
    /// failed a type check.
    pub fn require<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() && !self.errors.contains_key(field) {
            self.error(field, REQUIRED);
        }
        value
    }

    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error("Invalid input", self.errors))
        }
    }
}

fn is_valid_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}
