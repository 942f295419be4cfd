//! Server-side models.

pub mod config;
