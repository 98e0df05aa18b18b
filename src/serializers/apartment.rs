use serde::Serialize;
use serde_json::Value;

use crate::database::models::{Apartment, Builder, NewApartment};
use crate::error::ApiError;
use crate::serializers::choices;
use crate::serializers::fields::Extractor;

/// Read shape. The owning builder comes back as the full nested object; the
/// `builder_id` reference is write-only.
#[derive(Debug, Serialize)]
pub struct ApartmentOut {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub images: Vec<String>,
    pub object_code: String,
    pub floor: i64,
    pub building_count: i64,
    pub material: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub available_programs: Vec<String>,
    pub conditions: Vec<String>,
    pub description: String,
    pub has_balcony: bool,
    pub is_balcony_glazed: bool,
    pub building_start_date: chrono::NaiveDate,
    pub home_type: String,
    pub bathroom_type: String,
    pub security: String,
    pub parking_type: String,
    pub elevator_type: String,
    pub apartment_types: Vec<Value>,
    pub builder: Builder,
}

impl ApartmentOut {
    pub fn from_row(apartment: Apartment, builder: Builder) -> Self {
        Self {
            id: apartment.id,
            name: apartment.name,
            address: apartment.address,
            images: apartment.images.0,
            object_code: apartment.object_code,
            floor: apartment.floor,
            building_count: apartment.building_count,
            material: apartment.material,
            start_date: apartment.start_date,
            end_date: apartment.end_date,
            available_programs: apartment.available_programs.0,
            conditions: apartment.conditions.0,
            description: apartment.description,
            has_balcony: apartment.has_balcony,
            is_balcony_glazed: apartment.is_balcony_glazed,
            building_start_date: apartment.building_start_date,
            home_type: apartment.home_type,
            bathroom_type: apartment.bathroom_type,
            security: apartment.security,
            parking_type: apartment.parking_type,
            elevator_type: apartment.elevator_type,
            apartment_types: apartment.apartment_types.0,
            builder,
        }
    }
}

/// Full write: create and PUT. The `builder_id` reference is extracted here;
/// its existence is checked by the handler against the store.
pub fn parse_create(value: &Value) -> Result<NewApartment, ApiError> {
    let mut ex = Extractor::new(value)?;

    let name = ex.string("name");
    let name = ex.require("name", name);
    let address = ex.string("address");
    let address = ex.require("address", address);
    let images = ex.string_list("images");
    let object_code = ex.string("object_code");
    let object_code = ex.require("object_code", object_code);
    let floor = ex.unsigned("floor");
    let floor = ex.require("floor", floor);
    let building_count = ex.unsigned("building_count");
    let building_count = ex.require("building_count", building_count);
    let material = ex.choice("material", choices::MATERIAL);
    let material = ex.require("material", material);
    let start_date = ex.date("start_date");
    let start_date = ex.require("start_date", start_date);
    let end_date = ex.date("end_date");
    let end_date = ex.require("end_date", end_date);
    let available_programs = ex.string_list("available_programs");
    let conditions = ex.string_list("conditions");
    let description = ex.string("description");
    let description = ex.require("description", description);
    let has_balcony = ex.boolean("has_balcony");
    let is_balcony_glazed = ex.boolean("is_balcony_glazed");
    let building_start_date = ex.date("building_start_date");
    let building_start_date = ex.require("building_start_date", building_start_date);
    let home_type = ex.choice("home_type", choices::HOME_TYPE);
    let home_type = ex.require("home_type", home_type);
    let bathroom_type = ex.choice("bathroom_type", choices::BATHROOM_TYPE);
    let bathroom_type = ex.require("bathroom_type", bathroom_type);
    let security = ex.choice("security", choices::SECURITY);
    let security = ex.require("security", security);
    let parking_type = ex.choice("parking_type", choices::PARKING_TYPE);
    let parking_type = ex.require("parking_type", parking_type);
    let elevator_type = ex.choice("elevator_type", choices::ELEVATOR_TYPE);
    let elevator_type = ex.require("elevator_type", elevator_type);
    let apartment_types = ex.value_list("apartment_types");
    let builder_id = ex.integer("builder_id");
    let builder_id = ex.require("builder_id", builder_id);

    ex.finish()?;

    Ok(NewApartment {
        name: name.unwrap_or_default(),
        address: address.unwrap_or_default(),
        images: images.unwrap_or_default(),
        object_code: object_code.unwrap_or_default(),
        floor: floor.unwrap_or_default(),
        building_count: building_count.unwrap_or_default(),
        material: material.unwrap_or_default(),
        start_date: start_date.unwrap_or_default(),
        end_date: end_date.unwrap_or_default(),
        available_programs: available_programs.unwrap_or_default(),
        conditions: conditions.unwrap_or_default(),
        description: description.unwrap_or_default(),
        has_balcony: has_balcony.unwrap_or(false),
        is_balcony_glazed: is_balcony_glazed.unwrap_or(false),
        building_start_date: building_start_date.unwrap_or_default(),
        home_type: home_type.unwrap_or_default(),
        bathroom_type: bathroom_type.unwrap_or_default(),
        security: security.unwrap_or_default(),
        parking_type: parking_type.unwrap_or_default(),
        elevator_type: elevator_type.unwrap_or_default(),
        apartment_types: apartment_types.unwrap_or_default(),
        builder_id: builder_id.unwrap_or_default(),
    })
}

/// Partial write: PATCH. Absent fields keep the stored value; present fields
/// go through the same checks as a full write.
pub fn parse_update(value: &Value, base: NewApartment) -> Result<NewApartment, ApiError> {
    let mut ex = Extractor::new(value)?;

    let name = ex.string("name");
    let address = ex.string("address");
    let images = ex.string_list("images");
    let object_code = ex.string("object_code");
    let floor = ex.unsigned("floor");
    let building_count = ex.unsigned("building_count");
    let material = ex.choice("material", choices::MATERIAL);
    let start_date = ex.date("start_date");
    let end_date = ex.date("end_date");
    let available_programs = ex.string_list("available_programs");
    let conditions = ex.string_list("conditions");
    let description = ex.string("description");
    let has_balcony = ex.boolean("has_balcony");
    let is_balcony_glazed = ex.boolean("is_balcony_glazed");
    let building_start_date = ex.date("building_start_date");
    let home_type = ex.choice("home_type", choices::HOME_TYPE);
    let bathroom_type = ex.choice("bathroom_type", choices::BATHROOM_TYPE);
    let security = ex.choice("security", choices::SECURITY);
    let parking_type = ex.choice("parking_type", choices::PARKING_TYPE);
    let elevator_type = ex.choice("elevator_type", choices::ELEVATOR_TYPE);
    let apartment_types = ex.value_list("apartment_types");
    let builder_id = ex.integer("builder_id");

    ex.finish()?;

    Ok(NewApartment {
        name: name.unwrap_or(base.name),
        address: address.unwrap_or(base.address),
        images: images.unwrap_or(base.images),
        object_code: object_code.unwrap_or(base.object_code),
        floor: floor.unwrap_or(base.floor),
        building_count: building_count.unwrap_or(base.building_count),
        material: material.unwrap_or(base.material),
        start_date: start_date.unwrap_or(base.start_date),
        end_date: end_date.unwrap_or(base.end_date),
        available_programs: available_programs.unwrap_or(base.available_programs),
        conditions: conditions.unwrap_or(base.conditions),
        description: description.unwrap_or(base.description),
        has_balcony: has_balcony.unwrap_or(base.has_balcony),
        is_balcony_glazed: is_balcony_glazed.unwrap_or(base.is_balcony_glazed),
        building_start_date: building_start_date.unwrap_or(base.building_start_date),
        home_type: home_type.unwrap_or(base.home_type),
        bathroom_type: bathroom_type.unwrap_or(base.bathroom_type),
        security: security.unwrap_or(base.security),
        parking_type: parking_type.unwrap_or(base.parking_type),
        elevator_type: elevator_type.unwrap_or(base.elevator_type),
        apartment_types: apartment_types.unwrap_or(base.apartment_types),
        builder_id: builder_id.unwrap_or(base.builder_id),
    })
}
