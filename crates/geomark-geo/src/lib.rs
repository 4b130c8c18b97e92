//! Geomark Geo - flat-Earth coordinate transforms, geometry validation, and
//! conversions to the `geo` crate types.

pub mod convert;
pub mod transform;
pub mod validation;

pub use convert::{bounding_box, to_geo};
pub use transform::{local_distance_m, to_degrees, to_meters};
pub use validation::{validate_geometry, ValidationError, ValidationResult};
