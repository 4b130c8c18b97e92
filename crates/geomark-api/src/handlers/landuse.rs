use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{LandUseRequest, LandUseResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /detect-land-use
pub async fn detect_land_use(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LandUseRequest>,
) -> Result<Json<LandUseResponse>, ApiError> {
    let result = state.service.detect_land_use(&request.geometry).await.map_err(|e| {
        tracing::error!(error = %e, "Land use detection failed");
        ApiError::from(e)
    })?;

    let classification = result.classification;
    Ok(Json(LandUseResponse {
        land_use: classification.primary,
        confidence: classification.confidence,
        alternatives: classification.alternatives,
        processing_time_ms: result.processing_time_ms,
    }))
}
