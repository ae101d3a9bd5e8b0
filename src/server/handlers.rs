//! HTTP request handlers
//!
//! A scrape of the telemetry path always answers 200 while the process
//! lives: a failed collection cycle surfaces as zero exported series
//! plus the exporter meta-metrics, never as a listener failure.

use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use tracing::{debug, error, instrument};

use super::AppState;
use crate::exporter::{ExpositionFormatter, Sample};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Health status
    status: String,
    /// Application version
    version: String,
}

/// Root endpoint - static landing page linking to the telemetry path
pub async fn root(State(state): State<AppState>) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>NameNode Exporter</title>
</head>
<body>
    <h1>NameNode Exporter</h1>
    <p>Version: {}</p>
    <ul>
        <li><a href="/health">Health Check</a></li>
        <li><a href="{}">Metrics</a></li>
    </ul>
</body>
</html>"#,
        env!("CARGO_PKG_VERSION"),
        state.config.server.path
    );
    Html(html)
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Telemetry endpoint - runs one collection cycle and returns the
/// samples in Prometheus text exposition format
#[instrument(skip(state), name = "metrics_handler")]
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let (samples, scrape_success) = match state.collector.collect().await {
        Ok(samples) => (samples, true),
        Err(e) => {
            // Cycle-level failure: zero samples this scrape, visible
            // through the meta-metrics below. The listener keeps going.
            error!(target_url = %state.collector.target(), error = %e, "Collection cycle failed");
            (Vec::new(), false)
        }
    };

    let duration = start.elapsed().as_secs_f64();
    let namespace = &state.config.namespace;
    let sample_count = samples.len();

    let mut all_samples = samples;
    all_samples.push(
        Sample::new(
            format!("{}_exporter_scrape_success", namespace),
            if scrape_success { 1.0 } else { 0.0 },
        )
        .with_help("Whether the last fetch of the JMX document succeeded"),
    );
    all_samples.push(
        Sample::new(
            format!("{}_exporter_scrape_duration_seconds", namespace),
            duration,
        )
        .with_help("Time spent on the last collection cycle"),
    );
    all_samples.push(
        Sample::new(
            format!("{}_exporter_samples_scraped", namespace),
            sample_count as f64,
        )
        .with_help("Number of samples emitted by the last collection cycle"),
    );

    let output = ExpositionFormatter::new().format(&all_samples);

    debug!(
        duration_ms = start.elapsed().as_millis() as u64,
        samples = sample_count,
        success = scrape_success,
        "Scrape complete"
    );

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        output,
    )
}
