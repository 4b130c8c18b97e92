use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use geomark_core::config::LayeredConfig;
use geomark_inference::{InferenceOptions, InferenceService, SimulatedImagery, SimulatedModelBackend};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geomark_api::create_router;
use geomark_api::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geomark_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = LayeredConfig::with_defaults();
    if let Ok(path) = env::var("GEOMARK_CONFIG") {
        config = config
            .load_from_file(&path)
            .with_context(|| format!("Failed to load config file {}", path))?;
    }
    let config = config.load_from_env();

    let port: u16 = env::var("GEOMARK_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8000);

    tracing::info!(
        port = port,
        default_radius_m = config.default_radius_m.value,
        imagery_timeout_ms = config.imagery_timeout_ms.value,
        "Starting Geomark API server"
    );

    let service = Arc::new(InferenceService::new(
        Arc::new(SimulatedImagery::default()),
        Arc::new(SimulatedModelBackend::default()),
        InferenceOptions::from_config(&config),
    ));
    let state = Arc::new(AppState::new(service));

    // The original deployment fronted a browser client from arbitrary hosts
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
