pub mod apartment;
pub mod application;
pub mod builder;
pub mod profile;
pub mod uploaded_file;
pub mod user;

pub use apartment::{Apartment, NewApartment};
pub use application::{Application, NewApplication};
pub use builder::{Builder, NewBuilder};
pub use profile::{NewUserProfile, UserProfile};
pub use uploaded_file::UploadedFile;
pub use user::{NewUser, User};
