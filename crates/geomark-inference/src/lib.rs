//! Geomark Inference - the geometric inference pipeline.
//!
//! Polygon synthesis from a point sample, polygon refinement under a
//! simulated per-vertex confidence model, land-use scoring as a normalized
//! ranked distribution, and the service that orchestrates them behind
//! imagery-provider and model-backend ports.

pub mod landuse;
pub mod model;
pub mod ports;
pub mod refine;
pub mod service;
pub mod synthesize;

pub use landuse::classify_land_use;
pub use model::{ModelHandle, ModelKind, ModelState};
pub use ports::{ImageryProvider, ModelBackend, SimulatedImagery, SimulatedModelBackend};
pub use refine::refine_geometry;
pub use service::{InferenceOptions, InferenceService, ServiceStatus};
pub use synthesize::synthesize_parcel;
