//! Wire-side validation and serialization.
//!
//! Inbound payloads are checked field by field before anything reaches the
//! query layer; failures come back as a 400 with a `field_errors` map naming
//! every offending field. Outbound shapes mirror the read/write asymmetry of
//! the API: an apartment is written with a `builder_id` reference but read
//! back with the full nested `builder` object.

pub mod apartment;
pub mod application;
pub mod auth;
pub mod builder;
pub mod choices;
pub mod fields;
pub mod file;
pub mod profile;
