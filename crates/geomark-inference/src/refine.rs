//! Polygon refinement: per-vertex perturbation under a simulated confidence
//! model, plus selective densification of sparse rings.
//!
//! Ring endpoints (index 0 and the closing duplicate) pass through unchanged
//! so closure is preserved by construction; it is still re-checked
//! defensively afterwards. Non-polygon geometries pass through untouched.

use geomark_core::models::{close_ring, Geometry, Ring};
use rand::Rng;

/// Maximum per-vertex adjustment in degrees (~10 m).
const MAX_VERTEX_ADJUSTMENT_DEG: f64 = 0.0001;

/// Maximum offset applied to an inserted midpoint, in degrees.
const MIDPOINT_OFFSET_DEG: f64 = 0.00005;

/// Rings at or above this length are not densified further.
const DENSIFY_LIMIT: usize = 20;

/// Refine a geometry. Polygons get per-vertex perturbation and optional
/// densification on every ring (exterior and holes); any other kind is
/// returned unchanged.
pub fn refine_geometry<R: Rng>(geometry: &Geometry, rng: &mut R) -> Geometry {
    match geometry {
        Geometry::Polygon { coordinates } => Geometry::Polygon {
            coordinates: coordinates.iter().map(|ring| refine_ring(ring, rng)).collect(),
        },
        other => other.clone(),
    }
}

fn refine_ring<R: Rng>(ring: &[[f64; 2]], rng: &mut R) -> Ring {
    let mut refined = Vec::with_capacity(ring.len() + 2);
    let closing = ring.len().saturating_sub(1);

    for (i, point) in ring.iter().enumerate() {
        // Endpoints pass through to keep the ring closed
        if i == 0 || i == closing {
            refined.push(*point);
            continue;
        }

        // Lower certainty allows a larger adjustment
        let certainty = rng.gen::<f64>();
        let adjustment = (1.0 - certainty) * MAX_VERTEX_ADJUSTMENT_DEG;

        refined.push([
            point[0] + (rng.gen::<f64>() - 0.5) * adjustment,
            point[1] + (rng.gen::<f64>() - 0.5) * adjustment,
        ]);
    }

    // Sparse rings get 0-2 extra vertices at perturbed segment midpoints,
    // inserted strictly between the endpoints
    if ring.len() < DENSIFY_LIMIT {
        let insertions = rng.gen_range(0..=2);
        for _ in 0..insertions {
            if refined.len() < 3 {
                break;
            }
            let idx = rng.gen_range(1..=refined.len() - 2);
            let a = refined[idx];
            let b = refined[idx + 1];

            let new_point = [
                (a[0] + b[0]) / 2.0 + (rng.gen::<f64>() - 0.5) * MIDPOINT_OFFSET_DEG,
                (a[1] + b[1]) / 2.0 + (rng.gen::<f64>() - 0.5) * MIDPOINT_OFFSET_DEG,
            ];
            refined.insert(idx + 1, new_point);
        }
    }

    close_ring(&mut refined);
    refined
}
