//! Polygon synthesis: a closed, irregular parcel boundary around a center
//! point.
//!
//! Vertices sit on 6-10 equally spaced base angles, each pushed outward by a
//! randomized fraction of the requested radius with multiplicative noise and
//! a small angular jitter, producing organic (non-circular) shapes. The
//! radius is converted to per-axis degree sizes with the flat-Earth
//! approximation, so the longitude extent shrinks with latitude.

use std::f64::consts::PI;

use geomark_core::models::{GeoPoint, Geometry};
use geomark_geo::transform::to_degrees;
use rand::Rng;

const MIN_VERTICES: usize = 6;
const MAX_VERTICES: usize = 10;

/// Synthesize a parcel boundary around `center`.
///
/// `radius_m` must be positive; callers enforce that upstream. A zero radius
/// degenerates to a polygon collapsed onto the center point.
pub fn synthesize_parcel<R: Rng>(center: GeoPoint, radius_m: f64, rng: &mut R) -> Geometry {
    let (radius_lng_deg, radius_lat_deg) = to_degrees(radius_m, radius_m, center.lat);

    let num_points = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut ring = Vec::with_capacity(num_points + 1);

    for i in 0..num_points {
        let angle = (i as f64 / num_points as f64) * 2.0 * PI;

        // 70-100% of the requested radius, plus 0-20% outward noise and a
        // slight angular adjustment
        let radius_factor = 0.7 + rng.gen::<f64>() * 0.3;
        let noise = rng.gen::<f64>() * 0.2;
        let angle_noise = rng.gen::<f64>() * 0.2;

        let lat =
            center.lat + (angle + angle_noise).sin() * radius_lat_deg * radius_factor * (1.0 + noise);
        let lng =
            center.lng + (angle + angle_noise).cos() * radius_lng_deg * radius_factor * (1.0 + noise);

        ring.push([lng, lat]);
    }

    // Close the ring by repeating the first position
    let first = ring[0];
    ring.push(first);

    Geometry::polygon(vec![ring])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geomark_core::models::ring_is_closed;
    use geomark_geo::transform::local_distance_m;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn exterior(geometry: &Geometry) -> &Vec<[f64; 2]> {
        geometry.exterior_ring().expect("synthesizer must produce a polygon")
    }

    #[test]
    fn test_ring_is_closed_with_bounded_vertex_count() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let geometry = synthesize_parcel(GeoPoint::new(-100.0, 40.0), 500.0, &mut rng);

            let ring = exterior(&geometry);
            assert!(ring_is_closed(ring), "seed {}: ring not closed", seed);
            // 6-10 vertices plus the closing duplicate
            assert!(
                (MIN_VERTICES + 1..=MAX_VERTICES + 1).contains(&ring.len()),
                "seed {}: unexpected ring length {}",
                seed,
                ring.len()
            );
        }
    }

    #[test]
    fn test_vertices_stay_within_noisy_radius() {
        let center = GeoPoint::new(-100.0, 40.0);
        let radius_m = 500.0;

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let geometry = synthesize_parcel(center, radius_m, &mut rng);

            for &[lng, lat] in exterior(&geometry) {
                let distance = local_distance_m(center, GeoPoint::new(lng, lat));
                // Max radial extent is factor < 1.0 times noise < 1.2
                assert!(
                    distance <= radius_m * 1.2 + 1e-6,
                    "seed {}: vertex {}m from center",
                    seed,
                    distance
                );
                assert!(distance >= radius_m * 0.7 * 0.99, "seed {}: vertex collapsed", seed);
            }
        }
    }

    #[test]
    fn test_zero_radius_degenerates_to_center() {
        let center = GeoPoint::new(10.0, 10.0);
        let mut rng = StdRng::seed_from_u64(1);
        let geometry = synthesize_parcel(center, 0.0, &mut rng);

        for &[lng, lat] in exterior(&geometry) {
            assert!((lng - center.lng).abs() < 1e-12);
            assert!((lat - center.lat).abs() < 1e-12);
        }
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let center = GeoPoint::new(-100.0, 40.0);

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        let a = synthesize_parcel(center, 500.0, &mut rng_a);
        let b = synthesize_parcel(center, 500.0, &mut rng_b);
        assert_eq!(a, b);
    }
}
