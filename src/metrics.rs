//! Prometheus metrics for request counting and latency tracking.
//!
//! Every HTTP request is labelled by method, route template, and status
//! code. The route label uses the pattern (`/api/products/:id`), never the
//! concrete path, to keep cardinality bounded.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Total HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// HTTP request duration histogram metric name.
pub const METRIC_HTTP_REQUEST_DURATION: &str = "http_request_duration_seconds";

/// Histogram buckets for request duration, in seconds.
pub const DURATION_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests");
    describe_histogram!(
        METRIC_HTTP_REQUEST_DURATION,
        "HTTP request duration in seconds"
    );

    debug!("Metrics initialized");
}

/// Record one completed HTTP request: increments the request counter and
/// records the elapsed duration, both labelled method/route/status_code.
pub fn record_http_request(method: &str, route: &str, status: u16, start: Instant) {
    let elapsed = start.elapsed().as_secs_f64();

    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status_code" => status.to_string()
    )
    .increment(1);

    histogram!(
        METRIC_HTTP_REQUEST_DURATION,
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status_code" => status.to_string()
    )
    .record(elapsed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_without_installed_recorder_is_a_noop() {
        // The metrics macros fall back to a no-op recorder, so request
        // recording must never panic in tests or before install.
        record_http_request("GET", "/api/products/:id", 200, Instant::now());
    }

    #[test]
    fn record_emits_labelled_counter_and_histogram() {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_http_request("GET", "/api/products/:id", 500, Instant::now());
        });

        let rendered = handle.render();
        assert!(rendered.contains(METRIC_HTTP_REQUESTS));
        assert!(rendered.contains(METRIC_HTTP_REQUEST_DURATION));
        assert!(rendered.contains("method=\"GET\""));
        assert!(rendered.contains("route=\"/api/products/:id\""));
        assert!(rendered.contains("status_code=\"500\""));
    }

    #[test]
    fn duration_buckets_are_sorted() {
        let mut sorted = DURATION_BUCKETS.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(sorted.as_slice(), DURATION_BUCKETS);
    }
}
