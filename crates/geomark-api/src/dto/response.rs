use geomark_core::models::{AlternativeLandUse, Geometry, LandUseCategory};
use serde::Serialize;

/// Boundary detection / improvement response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryResponse {
    pub geometry: Geometry,
    pub confidence: f64,
    pub processing_time_ms: u64,
}

/// Land-use detection response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandUseResponse {
    pub land_use: LandUseCategory,
    pub confidence: f64,
    pub alternatives: Vec<AlternativeLandUse>,
    pub processing_time_ms: u64,
}

/// Root banner response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self { message: "Geomark inference API is running" }
    }
}

/// Per-operation availability flags
#[derive(Debug, Serialize)]
pub struct ServiceAvailability {
    pub boundary_detection: &'static str,
    pub boundary_improvement: &'static str,
    pub land_use_detection: &'static str,
}

/// Per-model load state
#[derive(Debug, Serialize)]
pub struct ModelStates {
    pub boundary: &'static str,
    pub land_use: &'static str,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub services: ServiceAvailability,
    pub models: ModelStates,
}

impl HealthResponse {
    pub fn healthy(boundary_loaded: bool, land_use_loaded: bool) -> Self {
        fn state(loaded: bool) -> &'static str {
            if loaded {
                "loaded"
            } else {
                "unloaded"
            }
        }

        Self {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            services: ServiceAvailability {
                boundary_detection: "available",
                boundary_improvement: "available",
                land_use_detection: "available",
            },
            models: ModelStates {
                boundary: state(boundary_loaded),
                land_use: state(land_use_loaded),
            },
        }
    }
}
