use geomark_core::models::Geometry;
use serde::Deserialize;

/// Boundary detection request body
#[derive(Debug, Deserialize)]
pub struct BoundaryDetectionRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in meters; falls back to the configured default
    pub radius: Option<f64>,
}

/// Boundary improvement request body
#[derive(Debug, Deserialize)]
pub struct BoundaryImprovementRequest {
    pub geometry: Geometry,
}

/// Land-use detection request body
#[derive(Debug, Deserialize)]
pub struct LandUseRequest {
    pub geometry: Geometry,
}
