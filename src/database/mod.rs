pub mod manager;
pub mod models;

pub mod apartments;
pub mod applications;
pub mod builders;
pub mod files;
pub mod profiles;
pub mod users;
