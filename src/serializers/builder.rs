use serde_json::Value;

use crate::database::models::{Builder, NewBuilder};
use crate::error::ApiError;
use crate::serializers::fields::Extractor;

/// Full write: create and PUT. Required fields must all be present.
pub fn parse_create(value: &Value) -> Result<NewBuilder, ApiError> {
    let mut ex = Extractor::new(value)?;

    let icon = ex.url("icon");
    let name = ex.string("name");
    let name = ex.require("name", name);
    let contacts = ex.string("contacts");
    let contacts = ex.require("contacts", contacts);
    let phone_number = ex.string("phone_number");
    let phone_number = ex.require("phone_number", phone_number);
    let site = ex.url("site");
    let email = ex.email("email");
    let email = ex.require("email", email);

    ex.finish()?;

    Ok(NewBuilder {
        icon: icon.unwrap_or_default(),
        name: name.unwrap_or_default(),
        contacts: contacts.unwrap_or_default(),
        phone_number: phone_number.unwrap_or_default(),
        site: site.unwrap_or_default(),
        email: email.unwrap_or_default(),
    })
}

/// Partial write: PATCH. Absent fields keep the stored value.
pub fn parse_update(value: &Value, base: &Builder) -> Result<NewBuilder, ApiError> {
    let mut ex = Extractor::new(value)?;

    let icon = ex.url("icon");
    let name = ex.string("name");
    let contacts = ex.string("contacts");
    let phone_number = ex.string("phone_number");
    let site = ex.url("site");
    let email = ex.email("email");

    ex.finish()?;

    Ok(NewBuilder {
        icon: icon.unwrap_or_else(|| base.icon.clone()),
        name: name.unwrap_or_else(|| base.name.clone()),
        contacts: contacts.unwrap_or_else(|| base.contacts.clone()),
        phone_number: phone_number.unwrap_or_else(|| base.phone_number.clone()),
        site: site.unwrap_or_else(|| base.site.clone()),
        email: email.unwrap_or_else(|| base.email.clone()),
    })
}
