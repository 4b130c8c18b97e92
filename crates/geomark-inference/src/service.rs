//! The inference service: orchestrates model loading, imagery acquisition,
//! and the three inference operations, with per-operation timing and
//! all-or-nothing error propagation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use geomark_core::config::LayeredConfig;
use geomark_core::error::{GeomarkError, Result};
use geomark_core::models::{
    BoundaryInference, GeoPoint, Geometry, LandUseInference, RasterSample, ValidityMode,
};
use geomark_geo::transform::local_distance_m;
use geomark_geo::validation::validate_geometry;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::landuse::classify_land_use;
use crate::model::{ModelHandle, ModelKind};
use crate::ports::{ImageryProvider, ModelBackend};
use crate::refine::refine_geometry;
use crate::synthesize::synthesize_parcel;

/// Tunables snapshotted from configuration at construction time.
#[derive(Debug, Clone)]
pub struct InferenceOptions {
    pub default_radius_m: f64,
    pub imagery_timeout: Duration,
    pub model_load_timeout: Duration,
    /// Fixed seed for reproducible inference; None draws from entropy.
    pub rng_seed: Option<u64>,
}

impl InferenceOptions {
    pub fn from_config(config: &LayeredConfig) -> Self {
        Self {
            default_radius_m: config.default_radius_m.value,
            imagery_timeout: Duration::from_millis(config.imagery_timeout_ms.value),
            model_load_timeout: Duration::from_millis(config.model_load_timeout_ms.value),
            rng_seed: config.rng_seed.value,
        }
    }
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self::from_config(&LayeredConfig::with_defaults())
    }
}

/// Per-model load state for health reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceStatus {
    pub boundary_loaded: bool,
    pub land_use_loaded: bool,
}

/// Stateless inference operations over shared model handles.
pub struct InferenceService {
    imagery: Arc<dyn ImageryProvider>,
    boundary_model: ModelHandle,
    land_use_model: ModelHandle,
    default_radius_m: f64,
    imagery_timeout: Duration,
    rng_seed: Option<u64>,
}

impl InferenceService {
    pub fn new(
        imagery: Arc<dyn ImageryProvider>,
        backend: Arc<dyn ModelBackend>,
        options: InferenceOptions,
    ) -> Self {
        Self {
            imagery,
            boundary_model: ModelHandle::new(
                ModelKind::Boundary,
                backend.clone(),
                options.model_load_timeout,
            ),
            land_use_model: ModelHandle::new(
                ModelKind::LandUse,
                backend,
                options.model_load_timeout,
            ),
            default_radius_m: options.default_radius_m,
            imagery_timeout: options.imagery_timeout,
            rng_seed: options.rng_seed,
        }
    }

    pub fn default_radius_m(&self) -> f64 {
        self.default_radius_m
    }

    pub async fn status(&self) -> ServiceStatus {
        ServiceStatus {
            boundary_loaded: self.boundary_model.is_loaded().await,
            land_use_loaded: self.land_use_model.is_loaded().await,
        }
    }

    /// Detect a parcel boundary around a center point.
    pub async fn detect_boundary(
        &self,
        center: GeoPoint,
        radius_m: f64,
    ) -> Result<BoundaryInference> {
        let start = Instant::now();
        tracing::info!(
            lat = center.lat,
            lng = center.lng,
            radius_m = radius_m,
            "Detecting boundaries"
        );

        if !center.is_valid() {
            return Err(GeomarkError::InvalidCoordinate { lng: center.lng, lat: center.lat });
        }
        if radius_m <= 0.0 || !radius_m.is_finite() {
            return Err(GeomarkError::InvalidRadius { radius_m });
        }

        self.boundary_model.ensure_loaded().await?;
        self.fetch_point_bounded(center, radius_m).await?;

        let mut rng = self.request_rng();
        let geometry = synthesize_parcel(center, radius_m, &mut rng);
        let confidence = 0.75 + rng.gen::<f64>() * 0.2;

        self.check_output_geometry(&geometry, "detect_boundary")?;

        Ok(BoundaryInference {
            geometry,
            confidence,
            processing_time_ms: elapsed_ms(start),
        })
    }

    /// Refine an existing boundary. Non-polygon geometries pass through
    /// unchanged (with a fresh confidence), mirroring permissive input
    /// handling.
    pub async fn improve_boundary(&self, geometry: &Geometry) -> Result<BoundaryInference> {
        let start = Instant::now();
        tracing::info!(geometry_type = %geometry.geometry_type(), "Improving boundary");

        self.check_input_geometry(geometry)?;
        self.boundary_model.ensure_loaded().await?;

        // Sample a slightly larger region than the geometry's own footprint
        let (center, radius_m) = sampling_region(geometry, self.default_radius_m);
        self.fetch_point_bounded(center, radius_m * 1.2).await?;

        let mut rng = self.request_rng();
        let refined = refine_geometry(geometry, &mut rng);
        let confidence = 0.85 + rng.gen::<f64>() * 0.14;

        if refined.geometry_type() == geomark_core::models::GeometryType::Polygon {
            self.check_output_geometry(&refined, "improve_boundary")?;
        }

        Ok(BoundaryInference {
            geometry: refined,
            confidence,
            processing_time_ms: elapsed_ms(start),
        })
    }

    /// Classify land use for the region covered by a geometry.
    pub async fn detect_land_use(&self, geometry: &Geometry) -> Result<LandUseInference> {
        let start = Instant::now();
        tracing::info!(geometry_type = %geometry.geometry_type(), "Detecting land use");

        self.check_input_geometry(geometry)?;
        self.land_use_model.ensure_loaded().await?;
        self.fetch_geometry_bounded(geometry).await?;

        let mut rng = self.request_rng();
        let classification = classify_land_use(&mut rng);

        let mass = classification.total_mass();
        if (mass - 1.0).abs() > 1e-9 {
            return Err(GeomarkError::InvariantViolation {
                operation: "detect_land_use".to_string(),
                reason: format!("probability mass {} does not sum to 1", mass),
            });
        }

        Ok(LandUseInference {
            classification,
            processing_time_ms: elapsed_ms(start),
        })
    }

    fn request_rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    async fn fetch_point_bounded(&self, center: GeoPoint, radius_m: f64) -> Result<RasterSample> {
        match tokio::time::timeout(self.imagery_timeout, self.imagery.fetch_point(center, radius_m))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(GeomarkError::ImageryUnavailable {
                reason: format!("fetch timed out after {:?}", self.imagery_timeout),
            }),
        }
    }

    async fn fetch_geometry_bounded(&self, geometry: &Geometry) -> Result<RasterSample> {
        match tokio::time::timeout(self.imagery_timeout, self.imagery.fetch_geometry(geometry))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(GeomarkError::ImageryUnavailable {
                reason: format!("fetch timed out after {:?}", self.imagery_timeout),
            }),
        }
    }

    /// Inputs are validated leniently: coordinate ranges matter, unclosed
    /// rings are tolerated (the refiner re-closes them).
    fn check_input_geometry(&self, geometry: &Geometry) -> Result<()> {
        let validation = validate_geometry(geometry, ValidityMode::Lenient);
        if let Some(error) = validation.first_error() {
            return Err(GeomarkError::InvalidGeometry {
                location: error.location.clone(),
                reason: error.reason.clone(),
            });
        }
        Ok(())
    }

    /// Outputs are held to the strict contract; a failure here is an
    /// internal invariant violation, not a client error.
    fn check_output_geometry(&self, geometry: &Geometry, operation: &str) -> Result<()> {
        let validation = validate_geometry(geometry, ValidityMode::Strict);
        if let Some(error) = validation.first_error() {
            return Err(GeomarkError::InvariantViolation {
                operation: operation.to_string(),
                reason: format!("{}: {}", error.location, error.reason),
            });
        }
        Ok(())
    }
}

/// Center and radius of the imagery region for a refinement request: the
/// mean of the first ring's positions and the flat-Earth distance from the
/// first vertex to that mean. Other kinds fall back to the origin and the
/// default radius.
fn sampling_region(geometry: &Geometry, default_radius_m: f64) -> (GeoPoint, f64) {
    match geometry.exterior_ring() {
        Some(ring) if !ring.is_empty() => {
            let n = ring.len() as f64;
            let lng = ring.iter().map(|p| p[0]).sum::<f64>() / n;
            let lat = ring.iter().map(|p| p[1]).sum::<f64>() / n;
            let center = GeoPoint::new(lng, lat);
            let radius_m = local_distance_m(center, GeoPoint::new(ring[0][0], ring[0][1]));
            (center, radius_m)
        }
        _ => (GeoPoint::new(0.0, 0.0), default_radius_m),
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
