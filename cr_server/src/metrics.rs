//! Prometheus metrics for the registry site.
//!
//! Metrics are recorded through the `metrics` facade and exported only when
//! a listener address is configured. Without an installed recorder every
//! call is a no-op.
//!
//! # Metrics
//!
//! - `page_views_total{route,status}`
//! - `content_mutations_total{kind}`
//! - `tournament_submissions_total{outcome}`
//! - `tournaments_active`

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

/// Record a rendered page view.
pub fn page_views_total(route: &str, status: u16) {
    metrics::counter!("page_views_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record a successful content store mutation.
pub fn content_mutations_total(kind: &str) {
    metrics::counter!("content_mutations_total",
        "kind" => kind.to_string()
    )
    .increment(1);
}

/// Record the outcome of a create-tournament form submission.
pub fn tournament_submissions_total(outcome: &str) {
    metrics::counter!("tournament_submissions_total",
        "outcome" => outcome.to_string()
    )
    .increment(1);
}

/// Set the number of tournaments currently in the store.
pub fn tournaments_active(count: usize) {
    metrics::gauge!("tournaments_active").set(count as f64);
}
