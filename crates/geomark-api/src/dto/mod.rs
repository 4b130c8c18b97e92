mod request;
mod response;

pub use request::{BoundaryDetectionRequest, BoundaryImprovementRequest, LandUseRequest};
pub use response::{
    BoundaryResponse, HealthResponse, LandUseResponse, ModelStates, RootResponse,
    ServiceAvailability,
};
