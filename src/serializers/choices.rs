//! Closed vocabularies for the categorical fields. Values outside these sets
//! are rejected at the validation boundary; storage never sees them.

pub const MATERIAL: &[&str] = &["brick", "panel", "monolithic", "other"];

pub const HOME_TYPE: &[&str] = &["apartment", "house"];

pub const BATHROOM_TYPE: &[&str] = &["combined", "separate"];

pub const SECURITY: &[&str] = &["security", "concierge", "none"];

pub const PARKING_TYPE: &[&str] = &["underground", "ground", "none"];

pub const ELEVATOR_TYPE: &[&str] = &["passenger", "cargo", "both", "none"];

pub const APPLICATION_STATUS: &[&str] = &["accepted", "rejected", "in_progress"];
