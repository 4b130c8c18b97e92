//! Flat-Earth conversion between degree offsets and local meters.
//!
//! A local-planar approximation: one degree of latitude is treated as a
//! constant 110.54 km, one degree of longitude as 111.32 km scaled by the
//! cosine of the origin latitude. Only valid for small extents (up to a few
//! kilometers); not geodesically exact.

use geomark_core::models::GeoPoint;

/// Meters per degree of longitude at the equator.
pub const METERS_PER_DEGREE_LNG: f64 = 111_320.0;

/// Meters per degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 110_540.0;

/// Convert a degree offset from an origin into approximate (east, north)
/// distances in meters.
pub fn to_meters(d_lng: f64, d_lat: f64, origin_lat: f64) -> (f64, f64) {
    let east_m = d_lng * METERS_PER_DEGREE_LNG * origin_lat.to_radians().cos();
    let north_m = d_lat * METERS_PER_DEGREE_LAT;
    (east_m, north_m)
}

/// Inverse of [`to_meters`]: convert (east, north) meters into a degree
/// offset from an origin at the given latitude.
pub fn to_degrees(east_m: f64, north_m: f64, origin_lat: f64) -> (f64, f64) {
    let d_lng = east_m / (METERS_PER_DEGREE_LNG * origin_lat.to_radians().cos());
    let d_lat = north_m / METERS_PER_DEGREE_LAT;
    (d_lng, d_lat)
}

/// Approximate planar distance in meters between two nearby points.
pub fn local_distance_m(origin: GeoPoint, point: GeoPoint) -> f64 {
    let (east_m, north_m) = to_meters(point.lng - origin.lng, point.lat - origin.lat, origin.lat);
    east_m.hypot(north_m)
}
