use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/detect-boundary", post(handlers::detect_boundary))
        .route("/improve-boundary", post(handlers::improve_boundary))
        .route("/detect-land-use", post(handlers::detect_land_use))
        .with_state(state)
}
