//! Ports for the external collaborators the inference core consumes: an
//! imagery provider and a model backend. The in-repo implementations are
//! simulations with configurable latency; a production deployment supplies
//! real ones.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use geomark_core::error::Result;
use geomark_core::models::{GeoPoint, Geometry, RasterMetadata, RasterSample};
use geomark_geo::convert::bounding_box;
use geomark_geo::transform::to_degrees;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::model::ModelKind;

/// Source of raster samples for inference requests.
#[async_trait]
pub trait ImageryProvider: Send + Sync {
    /// Fetch a sample centered on a point, covering the given radius.
    async fn fetch_point(&self, center: GeoPoint, radius_m: f64) -> Result<RasterSample>;

    /// Fetch a sample covering a geometry's bounding region.
    async fn fetch_geometry(&self, geometry: &Geometry) -> Result<RasterSample>;

    fn name(&self) -> &str;
}

/// Loadable inference backend (segmentation or classification model).
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Load the model for the given kind. Called at most once per kind by a
    /// [`crate::ModelHandle`] unless a previous load failed.
    async fn load(&self, kind: ModelKind) -> Result<()>;

    fn name(&self) -> &str;
}

const SAMPLE_WIDTH: u32 = 512;
const SAMPLE_HEIGHT: u32 = 512;

/// Simulated imagery provider: artificial latency plus an opaque RGB noise
/// buffer with stub acquisition metadata.
#[derive(Debug, Clone)]
pub struct SimulatedImagery {
    latency: Duration,
    resolution_m: f64,
}

impl SimulatedImagery {
    pub fn new(latency: Duration) -> Self {
        Self { latency, resolution_m: 0.5 }
    }

    /// Zero-latency provider for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    fn sample(&self, extent: [f64; 4]) -> RasterSample {
        let mut pixels = vec![0u8; (SAMPLE_WIDTH * SAMPLE_HEIGHT * 3) as usize];
        StdRng::from_entropy().fill_bytes(&mut pixels);

        RasterSample {
            pixels,
            width: SAMPLE_WIDTH,
            height: SAMPLE_HEIGHT,
            metadata: RasterMetadata {
                acquired_at: Utc::now(),
                resolution_m: self.resolution_m,
                cloud_cover: 0.05,
                bands: vec![
                    "red".to_string(),
                    "green".to_string(),
                    "blue".to_string(),
                    "nir".to_string(),
                ],
                source: "simulated".to_string(),
                extent,
            },
        }
    }
}

impl Default for SimulatedImagery {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

#[async_trait]
impl ImageryProvider for SimulatedImagery {
    async fn fetch_point(&self, center: GeoPoint, radius_m: f64) -> Result<RasterSample> {
        tracing::info!(
            lat = center.lat,
            lng = center.lng,
            radius_m = radius_m,
            "Fetching satellite imagery for point"
        );
        tokio::time::sleep(self.latency).await;

        let (radius_lng_deg, radius_lat_deg) = to_degrees(radius_m, radius_m, center.lat);
        let extent = [
            center.lng - radius_lng_deg,
            center.lat - radius_lat_deg,
            center.lng + radius_lng_deg,
            center.lat + radius_lat_deg,
        ];
        Ok(self.sample(extent))
    }

    async fn fetch_geometry(&self, geometry: &Geometry) -> Result<RasterSample> {
        tracing::info!(
            geometry_type = %geometry.geometry_type(),
            "Fetching satellite imagery for geometry"
        );
        tokio::time::sleep(self.latency).await;

        let extent = bounding_box(geometry).unwrap_or([0.0; 4]);
        Ok(self.sample(extent))
    }

    fn name(&self) -> &str {
        "simulated-imagery"
    }
}

/// Simulated model backend with a configurable load delay.
#[derive(Debug, Clone)]
pub struct SimulatedModelBackend {
    load_delay: Duration,
}

impl SimulatedModelBackend {
    pub fn new(load_delay: Duration) -> Self {
        Self { load_delay }
    }

    /// Zero-delay backend for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for SimulatedModelBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[async_trait]
impl ModelBackend for SimulatedModelBackend {
    async fn load(&self, kind: ModelKind) -> Result<()> {
        tracing::info!(model = %kind, "Loading model");
        tokio::time::sleep(self.load_delay).await;
        tracing::info!(model = %kind, "Model loaded successfully");
        Ok(())
    }

    fn name(&self) -> &str {
        "simulated-model"
    }
}
