use std::sync::Arc;

use axum::{extract::State, Json};
use geomark_core::models::GeoPoint;

use crate::dto::{BoundaryDetectionRequest, BoundaryImprovementRequest, BoundaryResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /detect-boundary
pub async fn detect_boundary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BoundaryDetectionRequest>,
) -> Result<Json<BoundaryResponse>, ApiError> {
    let center = GeoPoint::new(request.longitude, request.latitude);
    let radius_m = request.radius.unwrap_or_else(|| state.service.default_radius_m());

    let result = state.service.detect_boundary(center, radius_m).await.map_err(|e| {
        tracing::error!(error = %e, "Boundary detection failed");
        ApiError::from(e)
    })?;

    Ok(Json(BoundaryResponse {
        geometry: result.geometry,
        confidence: result.confidence,
        processing_time_ms: result.processing_time_ms,
    }))
}

/// POST /improve-boundary
pub async fn improve_boundary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BoundaryImprovementRequest>,
) -> Result<Json<BoundaryResponse>, ApiError> {
    let result = state.service.improve_boundary(&request.geometry).await.map_err(|e| {
        tracing::error!(error = %e, "Boundary improvement failed");
        ApiError::from(e)
    })?;

    Ok(Json(BoundaryResponse {
        geometry: result.geometry,
        confidence: result.confidence,
        processing_time_ms: result.processing_time_ms,
    }))
}
