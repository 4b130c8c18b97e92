//! Conversions from the canonical geometry model to `geo` crate types.

use geo::algorithm::bounding_rect::BoundingRect;
use geomark_core::models::Geometry;

fn to_coords(positions: &[[f64; 2]]) -> Vec<geo::Coord> {
    positions.iter().map(|&[x, y]| geo::Coord { x, y }).collect()
}

fn to_polygon(rings: &[Vec<[f64; 2]>]) -> geo::Polygon {
    let exterior = rings.first().map(|r| to_coords(r)).unwrap_or_default();
    let interiors: Vec<geo::LineString> =
        rings.iter().skip(1).map(|r| geo::LineString::from(to_coords(r))).collect();
    geo::Polygon::new(geo::LineString::from(exterior), interiors)
}

/// Convert a canonical geometry to the equivalent `geo` type.
pub fn to_geo(geometry: &Geometry) -> geo::Geometry {
    match geometry {
        Geometry::Point { coordinates } => {
            geo::Geometry::Point(geo::Point::new(coordinates[0], coordinates[1]))
        }
        Geometry::LineString { coordinates } => {
            geo::Geometry::LineString(geo::LineString::from(to_coords(coordinates)))
        }
        Geometry::Polygon { coordinates } => geo::Geometry::Polygon(to_polygon(coordinates)),
        Geometry::MultiPoint { coordinates } => geo::Geometry::MultiPoint(geo::MultiPoint(
            coordinates.iter().map(|&[x, y]| geo::Point::new(x, y)).collect(),
        )),
        Geometry::MultiLineString { coordinates } => {
            geo::Geometry::MultiLineString(geo::MultiLineString(
                coordinates.iter().map(|line| geo::LineString::from(to_coords(line))).collect(),
            ))
        }
        Geometry::MultiPolygon { coordinates } => geo::Geometry::MultiPolygon(geo::MultiPolygon(
            coordinates.iter().map(|rings| to_polygon(rings)).collect(),
        )),
    }
}

/// Bounding box of a geometry as [min_lng, min_lat, max_lng, max_lat].
///
/// Returns None for geometries with no extent (e.g. an empty polygon).
pub fn bounding_box(geometry: &Geometry) -> Option<[f64; 4]> {
    let rect = to_geo(geometry).bounding_rect()?;
    Some([rect.min().x, rect.min().y, rect.max().x, rect.max().y])
}
