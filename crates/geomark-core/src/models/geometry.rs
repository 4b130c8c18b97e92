//! Canonical geometry types used across all geomark crates.
//!
//! The [`Geometry`] enum maps directly to GeoJSON geometry kinds with
//! coordinate arrays, so its serde form IS GeoJSON.

use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Both coordinates finite and within the valid lng/lat ranges.
    pub fn is_valid(&self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lng)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

/// One linear boundary of a polygon as `[lng, lat]` positions.
///
/// A well-formed ring has at least 4 positions with the first equal to the
/// last (closure invariant).
pub type Ring = Vec<[f64; 2]>;

/// Whether a ring's first and last positions coincide.
pub fn ring_is_closed(ring: &[[f64; 2]]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => first == last,
        _ => false,
    }
}

/// Close a ring by appending a copy of its first position if needed.
pub fn close_ring(ring: &mut Ring) {
    if !ring.is_empty() && !ring_is_closed(ring) {
        let first = ring[0];
        ring.push(first);
    }
}

/// Geometry validation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValidityMode {
    /// Strict validation - ring closure is enforced
    Strict,
    /// Lenient validation - unclosed rings are tolerated
    #[default]
    Lenient,
}

/// Geometry type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// GeoJSON-compatible geometry representation
///
/// This enum directly maps to GeoJSON geometry types with coordinate arrays.
/// Only `Polygon` gets bespoke treatment by the inference pipeline; every
/// other kind is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: [f64; 2],
    },
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
    Polygon {
        coordinates: Vec<Ring>,
    },
    MultiPoint {
        coordinates: Vec<[f64; 2]>,
    },
    MultiLineString {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Ring>>,
    },
}

impl Geometry {
    /// Create a Point geometry
    pub fn point(lng: f64, lat: f64) -> Self {
        Geometry::Point { coordinates: [lng, lat] }
    }

    /// Create a Polygon geometry from rings (exterior first, then holes)
    pub fn polygon(rings: Vec<Ring>) -> Self {
        Geometry::Polygon { coordinates: rings }
    }

    /// Get the geometry type
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point { .. } => GeometryType::Point,
            Geometry::LineString { .. } => GeometryType::LineString,
            Geometry::Polygon { .. } => GeometryType::Polygon,
            Geometry::MultiPoint { .. } => GeometryType::MultiPoint,
            Geometry::MultiLineString { .. } => GeometryType::MultiLineString,
            Geometry::MultiPolygon { .. } => GeometryType::MultiPolygon,
        }
    }

    /// The exterior ring, if this is a polygon with at least one ring.
    pub fn exterior_ring(&self) -> Option<&Ring> {
        match self {
            Geometry::Polygon { coordinates } => coordinates.first(),
            _ => None,
        }
    }

    /// Try to parse from a serde_json::Value (GeoJSON)
    pub fn from_geojson(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// Convert to serde_json::Value (GeoJSON)
    pub fn to_geojson(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
