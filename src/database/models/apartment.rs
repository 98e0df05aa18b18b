use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;

/// An apartment development row.
///
/// The categorical columns hold values from closed vocabularies enforced at
/// the validation boundary; a persisted row is assumed well-formed. `images`,
/// `available_programs`, `conditions`, and `apartment_types` persist as JSON
/// text and are opaque to the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Apartment {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub images: Json<Vec<String>>,
    pub object_code: String,
    pub floor: i64,
    pub building_count: i64,
    pub material: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub available_programs: Json<Vec<String>>,
    pub conditions: Json<Vec<String>>,
    pub description: String,
    pub has_balcony: bool,
    pub is_balcony_glazed: bool,
    pub building_start_date: NaiveDate,
    pub home_type: String,
    pub bathroom_type: String,
    pub security: String,
    pub parking_type: String,
    pub elevator_type: String,
    pub apartment_types: Json<Vec<Value>>,
    pub builder_id: i64,
}

/// Validated apartment fields ready for insert or full update. Categorical
/// fields already passed vocabulary checks and are stored as their wire
/// strings.
#[derive(Debug, Clone)]
pub struct NewApartment {
    pub name: String,
    pub address: String,
    pub images: Vec<String>,
    pub object_code: String,
    pub floor: i64,
    pub building_count: i64,
    pub material: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub available_programs: Vec<String>,
    pub conditions: Vec<String>,
    pub description: String,
    pub has_balcony: bool,
    pub is_balcony_glazed: bool,
    pub building_start_date: NaiveDate,
    pub home_type: String,
    pub bathroom_type: String,
    pub security: String,
    pub parking_type: String,
    pub elevator_type: String,
    pub apartment_types: Vec<Value>,
    pub builder_id: i64,
}
