//! Domain entities mirrored from the phonebook API.

pub mod contact;
pub mod phone;
pub mod types;
