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
    pub const HTTP_REQUESTS_TOTAL: &str = "emoticam_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "emoticam_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "emoticam_http_requests_in_flight";

    // Pipeline metrics
    pub const SEARCHES_TOTAL: &str = "emoticam_searches_total";
    pub const SEARCH_VIDEOS_RETURNED: &str = "emoticam_search_videos_returned";
    pub const ANALYSES_TOTAL: &str = "emoticam_analyses_total";

    // Rate limiting metrics
    pub const RATE_LIMIT_HITS_TOTAL: &str = "emoticam_rate_limit_hits_total";
}

/// Routes reported under their own label; everything else is `other`.
const KNOWN_PATHS: &[&str] = &[
    "/api/search",
    "/api/emotion",
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

/// Record which delivery tier served a search, and how many videos it returned.
pub fn record_search_outcome(tier: &str, videos: usize) {
    let labels = [("tier", tier.to_string())];
    counter!(names::SEARCHES_TOTAL, &labels).increment(1);
    histogram!(names::SEARCH_VIDEOS_RETURNED, &labels).record(videos as f64);
}

/// Record whether an analysis came from the model or the canned fallback.
pub fn record_analysis(source: &str) {
    let labels = [("source", source.to_string())];
    counter!(names::ANALYSES_TOTAL, &labels).increment(1);
}

/// Record rate limit hit.
pub fn record_rate_limit_hit(endpoint: &str) {
    let labels = [("endpoint", sanitize_path(endpoint))];
    counter!(names::RATE_LIMIT_HITS_TOTAL, &labels).increment(1);
}

/// Collapse unknown paths so scanners can't blow up label cardinality.
fn sanitize_path(path: &str) -> String {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        p => p,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("/api/search"), "/api/search");
        assert_eq!(sanitize_path("/api/search/"), "/api/search");
        assert_eq!(sanitize_path("/wp-login.php"), "other");
        assert_eq!(sanitize_path("/"), "other");
    }
}
