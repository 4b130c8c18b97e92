use geomark_core::models::{ring_is_closed, Geometry, Ring, ValidityMode};

/// Validation result with details
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validation error with location details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub location: String,
    pub reason: String,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, location: String, reason: String) {
        self.is_valid = false;
        self.errors.push(ValidationError { location, reason });
    }

    /// The first recorded error, if any
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }
}

/// Validate a geometry.
///
/// Coordinate finiteness and lng/lat ranges are checked in both modes.
/// Ring closure is enforced only in [`ValidityMode::Strict`]; lenient
/// validation tolerates unclosed rings, which downstream refinement
/// re-closes defensively.
pub fn validate_geometry(geometry: &Geometry, mode: ValidityMode) -> ValidationResult {
    let mut result = ValidationResult::valid();

    match geometry {
        Geometry::Point { coordinates } => {
            check_position(&mut result, "Point", coordinates);
        }
        Geometry::LineString { coordinates } => {
            validate_linestring(&mut result, "LineString", coordinates);
        }
        Geometry::Polygon { coordinates } => {
            validate_rings(&mut result, "Polygon", coordinates, mode);
        }
        Geometry::MultiPoint { coordinates } => {
            for (i, position) in coordinates.iter().enumerate() {
                check_position(&mut result, &format!("MultiPoint[{}]", i), position);
            }
        }
        Geometry::MultiLineString { coordinates } => {
            for (i, line) in coordinates.iter().enumerate() {
                validate_linestring(&mut result, &format!("MultiLineString[{}]", i), line);
            }
        }
        Geometry::MultiPolygon { coordinates } => {
            for (i, rings) in coordinates.iter().enumerate() {
                validate_rings(&mut result, &format!("MultiPolygon[{}]", i), rings, mode);
            }
        }
    }

    result
}

fn check_position(result: &mut ValidationResult, location: &str, position: &[f64; 2]) {
    let [lng, lat] = *position;
    if !lng.is_finite() || !lat.is_finite() {
        result.add_error(location.to_string(), "Coordinates must be finite".to_string());
        return;
    }
    if !(-180.0..=180.0).contains(&lng) {
        result.add_error(
            location.to_string(),
            format!("Longitude {} out of range [-180, 180]", lng),
        );
    }
    if !(-90.0..=90.0).contains(&lat) {
        result.add_error(location.to_string(), format!("Latitude {} out of range [-90, 90]", lat));
    }
}

fn validate_linestring(result: &mut ValidationResult, location: &str, line: &[[f64; 2]]) {
    if line.len() < 2 {
        result.add_error(
            location.to_string(),
            format!("LineString must have at least 2 positions, found {}", line.len()),
        );
        return;
    }
    for (i, position) in line.iter().enumerate() {
        check_position(result, &format!("{}[{}]", location, i), position);
    }
}

fn validate_rings(
    result: &mut ValidationResult,
    location: &str,
    rings: &[Ring],
    mode: ValidityMode,
) {
    if rings.is_empty() {
        result.add_error(location.to_string(), "Polygon must have at least one ring".to_string());
        return;
    }

    for (r, ring) in rings.iter().enumerate() {
        let ring_location = if r == 0 {
            format!("{} exterior", location)
        } else {
            format!("{} hole[{}]", location, r - 1)
        };

        if ring.len() < 4 {
            result.add_error(
                ring_location.clone(),
                format!("Ring must have at least 4 positions, found {}", ring.len()),
            );
            continue;
        }

        if mode == ValidityMode::Strict && !ring_is_closed(ring) {
            result.add_error(
                ring_location.clone(),
                "Ring is not closed: first and last positions differ".to_string(),
            );
        }

        for (i, position) in ring.iter().enumerate() {
            check_position(result, &format!("{}[{}]", ring_location, i), position);
        }
    }
}
