use geomark_inference::InferenceService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<InferenceService>,
}

impl AppState {
    pub fn new(service: Arc<InferenceService>) -> Self {
        Self { service }
    }
}
