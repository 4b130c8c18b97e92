//! Land-use categories, classification results, and category metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GeomarkError;

/// Closed set of land-use categories, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandUseCategory {
    Agricultural,
    Residential,
    Commercial,
    Industrial,
    Forestry,
    Recreational,
    Conservation,
    Transportation,
    Institutional,
    MixedUse,
}

impl LandUseCategory {
    /// All categories in canonical order. `ALL[0]` (agricultural) carries the
    /// domain prior used by the classifier.
    pub const ALL: [LandUseCategory; 10] = [
        LandUseCategory::Agricultural,
        LandUseCategory::Residential,
        LandUseCategory::Commercial,
        LandUseCategory::Industrial,
        LandUseCategory::Forestry,
        LandUseCategory::Recreational,
        LandUseCategory::Conservation,
        LandUseCategory::Transportation,
        LandUseCategory::Institutional,
        LandUseCategory::MixedUse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LandUseCategory::Agricultural => "agricultural",
            LandUseCategory::Residential => "residential",
            LandUseCategory::Commercial => "commercial",
            LandUseCategory::Industrial => "industrial",
            LandUseCategory::Forestry => "forestry",
            LandUseCategory::Recreational => "recreational",
            LandUseCategory::Conservation => "conservation",
            LandUseCategory::Transportation => "transportation",
            LandUseCategory::Institutional => "institutional",
            LandUseCategory::MixedUse => "mixed_use",
        }
    }
}

impl fmt::Display for LandUseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LandUseCategory {
    type Err = GeomarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LandUseCategory::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| {
                GeomarkError::Serialization(format!("Unknown land use category: {}", s))
            })
    }
}

/// An alternative category with its share of the probability mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeLandUse {
    pub land_use: LandUseCategory,
    pub confidence: f64,
}

/// Ranked land-use classification result.
///
/// When produced by the geomark classifier, the primary confidence plus the
/// alternative confidences sum to 1.0 within floating-point tolerance, and
/// the alternatives are sorted by confidence descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandUseClassification {
    pub primary: LandUseCategory,
    pub confidence: f64,
    pub alternatives: Vec<AlternativeLandUse>,
}

impl LandUseClassification {
    /// Total probability mass across primary and alternatives.
    pub fn total_mass(&self) -> f64 {
        self.confidence + self.alternatives.iter().map(|a| a.confidence).sum::<f64>()
    }
}

/// Descriptive metadata for a land-use category. Best-effort lookup aid, not
/// a validated contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDetails {
    pub description: &'static str,
    pub typical_features: &'static [&'static str],
    pub subdivisions: &'static [&'static str],
}

const UNKNOWN_DETAILS: CategoryDetails = CategoryDetails {
    description: "Unknown land use category",
    typical_features: &[],
    subdivisions: &[],
};

/// Details for a known category.
pub fn category_details(category: LandUseCategory) -> &'static CategoryDetails {
    match category {
        LandUseCategory::Agricultural => &CategoryDetails {
            description: "Land used for farming, crop production, or livestock",
            typical_features: &["crop patterns", "irrigation systems", "farm buildings"],
            subdivisions: &["arable", "pasture", "orchard", "vineyard", "plantation"],
        },
        LandUseCategory::Residential => &CategoryDetails {
            description: "Land used for housing and living quarters",
            typical_features: &["houses", "apartment buildings", "streets", "yards"],
            subdivisions: &["single-family", "multi-family", "high-density", "rural"],
        },
        LandUseCategory::Commercial => &CategoryDetails {
            description: "Land used for business and commerce",
            typical_features: &["office buildings", "retail stores", "parking lots"],
            subdivisions: &["retail", "office", "hospitality", "services"],
        },
        LandUseCategory::Industrial => &CategoryDetails {
            description: "Land used for manufacturing and processing",
            typical_features: &["factories", "warehouses", "heavy equipment", "storage yards"],
            subdivisions: &["light", "heavy", "extractive", "waste management"],
        },
        LandUseCategory::Forestry => &CategoryDetails {
            description: "Land covered by forests, managed for timber or conservation",
            typical_features: &["trees", "forest roads", "cleared areas"],
            subdivisions: &["natural", "plantation", "managed", "protected"],
        },
        LandUseCategory::Recreational => &CategoryDetails {
            description: "Land used for leisure and recreation",
            typical_features: &["parks", "sports fields", "playgrounds"],
            subdivisions: &["parks", "sports", "entertainment", "tourism"],
        },
        LandUseCategory::Conservation => &CategoryDetails {
            description: "Land protected for environmental preservation",
            typical_features: &["natural habitats", "limited development", "protected areas"],
            subdivisions: &["nature reserve", "wildlife sanctuary", "protected watershed"],
        },
        LandUseCategory::Transportation => &CategoryDetails {
            description: "Land used for transportation infrastructure",
            typical_features: &["roads", "railways", "airports", "ports"],
            subdivisions: &["road", "rail", "air", "water"],
        },
        LandUseCategory::Institutional => &CategoryDetails {
            description: "Land used for public institutions and services",
            typical_features: &["government buildings", "schools", "hospitals"],
            subdivisions: &["education", "healthcare", "government", "religious"],
        },
        LandUseCategory::MixedUse => &CategoryDetails {
            description: "Land with multiple combined uses",
            typical_features: &["combination of buildings", "mixed development"],
            subdivisions: &["residential-commercial", "live-work", "integrated"],
        },
    }
}

/// Details by category name. Unknown names yield a placeholder record rather
/// than an error.
pub fn lookup_category_details(name: &str) -> &'static CategoryDetails {
    match LandUseCategory::from_str(name) {
        Ok(category) => category_details(category),
        Err(_) => &UNKNOWN_DETAILS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in LandUseCategory::ALL {
            let parsed: LandUseCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_serde_snake_case() {
        let json = serde_json::to_string(&LandUseCategory::MixedUse).unwrap();
        assert_eq!(json, "\"mixed_use\"");

        let parsed: LandUseCategory = serde_json::from_str("\"agricultural\"").unwrap();
        assert_eq!(parsed, LandUseCategory::Agricultural);
    }

    #[test]
    fn test_details_for_every_category() {
        for category in LandUseCategory::ALL {
            let details = category_details(category);
            assert!(!details.description.is_empty());
            assert!(!details.typical_features.is_empty());
            assert!(!details.subdivisions.is_empty());
        }
    }

    #[test]
    fn test_unknown_category_placeholder() {
        let details = lookup_category_details("lunar_base");
        assert_eq!(details.description, "Unknown land use category");
        assert!(details.typical_features.is_empty());
        assert!(details.subdivisions.is_empty());
    }

    #[test]
    fn test_total_mass() {
        let classification = LandUseClassification {
            primary: LandUseCategory::Residential,
            confidence: 0.7,
            alternatives: vec![
                AlternativeLandUse { land_use: LandUseCategory::Commercial, confidence: 0.2 },
                AlternativeLandUse { land_use: LandUseCategory::MixedUse, confidence: 0.1 },
            ],
        };
        assert!((classification.total_mass() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_alternative_wire_format() {
        let alt = AlternativeLandUse {
            land_use: LandUseCategory::Forestry,
            confidence: 0.25,
        };
        let json = serde_json::to_string(&alt).unwrap();
        assert!(json.contains("\"landUse\":\"forestry\""));
    }
}
