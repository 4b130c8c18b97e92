//! Error types for Geomark

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeomarkError {
    // Input errors
    #[error("Invalid coordinate ({lng}, {lat}): longitude must be in [-180, 180] and latitude in [-90, 90]")]
    InvalidCoordinate { lng: f64, lat: f64 },

    #[error("Invalid search radius {radius_m}m: radius must be positive")]
    InvalidRadius { radius_m: f64 },

    #[error("Invalid geometry at {location}: {reason}")]
    InvalidGeometry { location: String, reason: String },

    // Backend errors
    #[error("Imagery provider unavailable: {reason}")]
    ImageryUnavailable { reason: String },

    #[error("Model '{kind}' unavailable: {reason}")]
    ModelUnavailable { kind: String, reason: String },

    // Post-condition errors
    #[error("Invariant violation in {operation}: {reason}")]
    InvariantViolation { operation: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GeomarkError {
    /// True for errors caused by malformed caller input (client errors at the
    /// transport boundary) as opposed to backend or internal failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GeomarkError::InvalidCoordinate { .. }
                | GeomarkError::InvalidRadius { .. }
                | GeomarkError::InvalidGeometry { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GeomarkError>;
