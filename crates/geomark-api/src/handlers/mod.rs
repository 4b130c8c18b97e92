mod boundary;
mod health;
mod landuse;

pub use boundary::{detect_boundary, improve_boundary};
pub use health::{health_check, root};
pub use landuse::detect_land_use;
