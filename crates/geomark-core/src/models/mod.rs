pub mod geometry;
pub mod inference;
pub mod landuse;
pub mod raster;

pub use geometry::{close_ring, ring_is_closed, GeoPoint, Geometry, GeometryType, Ring, ValidityMode};
pub use inference::{BoundaryInference, LandUseInference};
pub use landuse::{
    category_details, lookup_category_details, AlternativeLandUse, CategoryDetails,
    LandUseCategory, LandUseClassification,
};
pub use raster::{RasterMetadata, RasterSample};
