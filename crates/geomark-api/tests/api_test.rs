//! Route-level tests exercising the router with an in-process service.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use geomark_api::{create_router, AppState};
use geomark_inference::{
    InferenceOptions, InferenceService, SimulatedImagery, SimulatedModelBackend,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let options = InferenceOptions {
        default_radius_m: 500.0,
        imagery_timeout: Duration::from_secs(1),
        model_load_timeout: Duration::from_secs(1),
        rng_seed: Some(42),
    };
    let service = Arc::new(InferenceService::new(
        Arc::new(SimulatedImagery::instant()),
        Arc::new(SimulatedModelBackend::instant()),
        options,
    ));
    create_router(Arc::new(AppState::new(service)))
}

async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn root_banner() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_model_states() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["boundary_detection"], "available");
    assert_eq!(body["models"]["boundary"], "unloaded");
}

#[tokio::test]
async fn detect_boundary_returns_camel_case_wire_format() {
    let (status, body) = post_json(
        test_app(),
        "/detect-boundary",
        json!({ "latitude": 40.0, "longitude": -100.0, "radius": 500.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["geometry"]["type"], "Polygon");
    assert!(body["confidence"].as_f64().unwrap() >= 0.75);
    assert!(body.get("processingTimeMs").is_some());

    // Exterior ring is closed
    let ring = body["geometry"]["coordinates"][0].as_array().unwrap();
    assert_eq!(ring.first(), ring.last());
}

#[tokio::test]
async fn detect_boundary_rejects_invalid_latitude() {
    let (status, body) = post_json(
        test_app(),
        "/detect-boundary",
        json!({ "latitude": 95.0, "longitude": -100.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid coordinate"));
}

#[tokio::test]
async fn improve_boundary_round_trips_geometry() {
    let polygon = json!({
        "type": "Polygon",
        "coordinates": [[
            [-100.0, 40.0], [-99.99, 40.0], [-99.99, 40.01], [-100.0, 40.01], [-100.0, 40.0]
        ]]
    });

    let (status, body) =
        post_json(test_app(), "/improve-boundary", json!({ "geometry": polygon })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["geometry"]["type"], "Polygon");
    assert!(body["confidence"].as_f64().unwrap() >= 0.85);
}

#[tokio::test]
async fn improve_boundary_passes_through_points() {
    let point = json!({ "type": "Point", "coordinates": [10.0, 10.0] });

    let (status, body) =
        post_json(test_app(), "/improve-boundary", json!({ "geometry": point })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["geometry"], point);
}

#[tokio::test]
async fn unknown_geometry_kind_is_a_client_error() {
    let (status, _) = post_json(
        test_app(),
        "/improve-boundary",
        json!({ "geometry": { "type": "GeometryCollection", "geometries": [] } }),
    )
    .await;

    // Rejected by serde at the transport boundary
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn detect_land_use_returns_ranked_alternatives() {
    let polygon = json!({
        "type": "Polygon",
        "coordinates": [[
            [-100.0, 40.0], [-99.99, 40.0], [-99.99, 40.01], [-100.0, 40.01], [-100.0, 40.0]
        ]]
    });

    let (status, body) =
        post_json(test_app(), "/detect-land-use", json!({ "geometry": polygon })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["landUse"].is_string());

    let primary_confidence = body["confidence"].as_f64().unwrap();
    let alternatives = body["alternatives"].as_array().unwrap();
    assert!((2..=4).contains(&alternatives.len()));

    let mut mass = primary_confidence;
    let mut previous = f64::INFINITY;
    for alt in alternatives {
        let confidence = alt["confidence"].as_f64().unwrap();
        assert!(confidence <= previous);
        assert_ne!(alt["landUse"], body["landUse"]);
        previous = confidence;
        mass += confidence;
    }
    assert!((mass - 1.0).abs() < 1e-9);
}
