use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use crate::dto::{HealthResponse, RootResponse};
use crate::state::AppState;

pub async fn root() -> impl IntoResponse {
    Json(RootResponse::default())
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let status = state.service.status().await;
    Json(HealthResponse::healthy(status.boundary_loaded, status.land_use_loaded))
}
