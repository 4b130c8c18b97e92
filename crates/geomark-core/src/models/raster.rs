//! Opaque raster samples returned by an imagery provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Acquisition metadata attached to a raster sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterMetadata {
    pub acquired_at: DateTime<Utc>,
    /// Ground resolution in meters per pixel.
    pub resolution_m: f64,
    /// Cloud cover fraction in [0, 1].
    pub cloud_cover: f64,
    pub bands: Vec<String>,
    pub source: String,
    /// Requested bounding region as [min_lng, min_lat, max_lng, max_lat].
    pub extent: [f64; 4],
}

/// An imagery sample for one inference request.
///
/// The pixel buffer is opaque to this core: it is handed to the inference
/// backend, never parsed here.
#[derive(Debug, Clone)]
pub struct RasterSample {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub metadata: RasterMetadata,
}

impl RasterSample {
    /// Buffer length expected for an RGB sample of the stated dimensions.
    pub fn expected_rgb_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}
