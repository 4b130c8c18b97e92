//! Operation result types.

use serde::{Deserialize, Serialize};

use super::geometry::Geometry;
use super::landuse::LandUseClassification;

/// Result of boundary detection or boundary improvement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryInference {
    pub geometry: Geometry,
    pub confidence: f64,
    /// Wall-clock duration of the operation in milliseconds.
    pub processing_time_ms: u64,
}

/// Result of land-use detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandUseInference {
    pub classification: LandUseClassification,
    pub processing_time_ms: u64,
}
