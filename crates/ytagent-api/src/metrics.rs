//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "ytagent_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "ytagent_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "ytagent_http_requests_in_flight";

    // Content generation
    pub const SEO_GENERATED_TOTAL: &str = "ytagent_seo_generated_total";

    // Uploads
    pub const UPLOADS_TOTAL: &str = "ytagent_uploads_total";
    pub const UPLOAD_BYTES: &str = "ytagent_upload_bytes";

    // Rate limiting metrics
    pub const RATE_LIMIT_HITS_TOTAL: &str = "ytagent_rate_limit_hits_total";
}

/// Routes served by the app; anything else is reported as "other".
const KNOWN_PATHS: &[&str] = &[
    "/",
    "/api/upload",
    "/api/seo",
    "/api/categories",
    "/health",
    "/healthz",
    "/ready",
    "/metrics",
];

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record one SEO generation. `category` is the resolved key or "unknown".
pub fn record_seo_generated(category: &str, fallback: bool) {
    let labels = [
        ("category", category.to_string()),
        ("fallback", fallback.to_string()),
    ];
    counter!(names::SEO_GENERATED_TOTAL, &labels).increment(1);
}

/// Record an upload attempt.
pub fn record_upload(uploader: &str, outcome: &str, source: &str) {
    let labels = [
        ("uploader", uploader.to_string()),
        ("outcome", outcome.to_string()),
        ("source", source.to_string()),
    ];
    counter!(names::UPLOADS_TOTAL, &labels).increment(1);
}

/// Record the size of a posted video file.
pub fn record_upload_bytes(bytes: usize) {
    histogram!(names::UPLOAD_BYTES).record(bytes as f64);
}

/// Record rate limit hit.
pub fn record_rate_limit_hit(endpoint: &str) {
    let labels = [("endpoint", sanitize_path(endpoint))];
    counter!(names::RATE_LIMIT_HITS_TOTAL, &labels).increment(1);
}

/// Collapse unknown paths so labels stay bounded.
fn sanitize_path(path: &str) -> String {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    if KNOWN_PATHS.contains(&trimmed) {
        trimmed.to_string()
    } else {
        "other".to_string()
    }
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}
