use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::database::manager::StoreError;
use crate::database::models::{Apartment, NewApartment};

pub async fn list(pool: &SqlitePool) -> Result<Vec<Apartment>, StoreError> {
    let rows = sqlx::query_as::<_, Apartment>("SELECT * FROM apartments ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Apartment>, StoreError> {
    let row = sqlx::query_as::<_, Apartment>("SELECT * FROM apartments WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, apartment: &NewApartment) -> Result<Apartment, StoreError> {
    let row = sqlx::query_as::<_, Apartment>(
        "INSERT INTO apartments (
            name, address, images, object_code, floor, building_count, material,
            start_date, end_date, available_programs, conditions, description,
            has_balcony, is_balcony_glazed, building_start_date, home_type,
            bathroom_type, security, parking_type, elevator_type, apartment_types,
            builder_id
         )
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING *",
    )
    .bind(&apartment.name)
    .bind(&apartment.address)
    .bind(Json(&apartment.images))
    .bind(&apartment.object_code)
    .bind(apartment.floor)
    .bind(apartment.building_count)
    .bind(&apartment.material)
    .bind(apartment.start_date)
    .bind(apartment.end_date)
    .bind(Json(&apartment.available_programs))
    .bind(Json(&apartment.conditions))
    .bind(&apartment.description)
    .bind(apartment.has_balcony)
    .bind(apartment.is_balcony_glazed)
    .bind(apartment.building_start_date)
    .bind(&apartment.home_type)
    .bind(&apartment.bathroom_type)
    .bind(&apartment.security)
    .bind(&apartment.parking_type)
    .bind(&apartment.elevator_type)
    .bind(Json(&apartment.apartment_types))
    .bind(apartment.builder_id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    apartment: &NewApartment,
) -> Result<Option<Apartment>, StoreError> {
    let row = sqlx::query_as::<_, Apartment>(
        "UPDATE apartments SET
            name = ?, address = ?, images = ?, object_code = ?, floor = ?,
            building_count = ?, material = ?, start_date = ?, end_date = ?,
            available_programs = ?, conditions = ?, description = ?,
            has_balcony = ?, is_balcony_glazed = ?, building_start_date = ?,
            home_type = ?, bathroom_type = ?, security = ?, parking_type = ?,
            elevator_type = ?, apartment_types = ?, builder_id = ?
         WHERE id = ?
         RETURNING *",
    )
    .bind(&apartment.name)
    .bind(&apartment.address)
    .bind(Json(&apartment.images))
    .bind(&apartment.object_code)
    .bind(apartment.floor)
    .bind(apartment.building_count)
    .bind(&apartment.material)
    .bind(apartment.start_date)
    .bind(apartment.end_date)
    .bind(Json(&apartment.available_programs))
    .bind(Json(&apartment.conditions))
    .bind(&apartment.description)
    .bind(apartment.has_balcony)
    .bind(apartment.is_balcony_glazed)
    .bind(apartment.building_start_date)
    .bind(&apartment.home_type)
    .bind(&apartment.bathroom_type)
    .bind(&apartment.security)
    .bind(&apartment.parking_type)
    .bind(&apartment.elevator_type)
    .bind(Json(&apartment.apartment_types))
    .bind(apartment.builder_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM apartments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Existing row converted back into the writable field set, used as the base
/// for PATCH merges.
pub fn to_new(apartment: &Apartment) -> NewApartment {
    NewApartment {
        name: apartment.name.clone(),
        address: apartment.address.clone(),
        images: apartment.images.0.clone(),
        object_code: apartment.object_code.clone(),
        floor: apartment.floor,
        building_count: apartment.building_count,
        material: apartment.material.clone(),
        start_date: apartment.start_date,
        end_date: apartment.end_date,
        available_programs: apartment.available_programs.0.clone(),
        conditions: apartment.conditions.0.clone(),
        description: apartment.description.clone(),
        has_balcony: apartment.has_balcony,
        is_balcony_glazed: apartment.is_balcony_glazed,
        building_start_date: apartment.building_start_date,
        home_type: apartment.home_type.clone(),
        bathroom_type: apartment.bathroom_type.clone(),
        security: apartment.security.clone(),
        parking_type: apartment.parking_type.clone(),
        elevator_type: apartment.elevator_type.clone(),
        apartment_types: apartment.apartment_types.0.clone(),
        builder_id: apartment.builder_id,
    }
}
