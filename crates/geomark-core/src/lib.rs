//! Geomark Core - Domain models, error types, and configuration
//!
//! This crate contains the core domain types shared by all geomark crates.

pub mod config;
pub mod error;
pub mod models;

pub use error::{GeomarkError, Result};
