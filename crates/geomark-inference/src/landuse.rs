//! Land-use scoring: a ranked probability distribution over the fixed
//! category set.
//!
//! The primary category carries a 0.4 prior toward agricultural land (it can
//! still be drawn again from the uniform branch, so its true rate is 0.46).
//! The remaining probability mass is partitioned over 2-4 distinct
//! alternatives so the whole distribution sums to exactly 1.

use std::cmp::Ordering;

use geomark_core::models::{AlternativeLandUse, LandUseCategory, LandUseClassification};
use rand::seq::SliceRandom;
use rand::Rng;

/// Probability of short-circuiting the primary draw to agricultural.
const AGRICULTURAL_PRIOR: f64 = 0.4;

/// Score land use for one imagery sample.
///
/// The sample itself does not influence the stub distribution; a production
/// backend would condition the draw on it.
pub fn classify_land_use<R: Rng>(rng: &mut R) -> LandUseClassification {
    let categories = LandUseCategory::ALL;

    let primary = if rng.gen::<f64>() < AGRICULTURAL_PRIOR {
        categories[0]
    } else {
        categories[rng.gen_range(0..categories.len())]
    };
    let confidence = 0.65 + rng.gen::<f64>() * 0.3;

    // 2-4 distinct alternatives drawn without replacement from the
    // non-primary categories
    let mut pool: Vec<LandUseCategory> =
        categories.iter().copied().filter(|c| *c != primary).collect();
    let num_alternatives = rng.gen_range(2..=4);
    let (chosen, _) = pool.partial_shuffle(rng, num_alternatives);

    // Partition the leftover mass: each alternative but the last takes a
    // random portion (up to 70%) of what remains, the last takes the rest
    let mut alternatives = Vec::with_capacity(chosen.len());
    let mut remaining = 1.0 - confidence;
    for (i, category) in chosen.iter().enumerate() {
        let share = if i == chosen.len() - 1 {
            remaining
        } else {
            let portion = remaining * (rng.gen::<f64>() * 0.7);
            remaining -= portion;
            portion
        };
        alternatives.push(AlternativeLandUse { land_use: *category, confidence: share });
    }

    // Stable sort keeps draw order for equal confidences
    alternatives.sort_by(|a, b| {
        b.confidence.partial_cmp(&a.confidence).unwrap_or(Ordering::Equal)
    });

    LandUseClassification { primary, confidence, alternatives }
}
