//! Structured logging configuration.
//!
//! The core library logs through the `log` facade; the subscriber installed
//! here forwards those records alongside the server's own `tracing` events.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Log levels are configurable via the `RUST_LOG` env var.
///
/// # Example
///
/// ```no_run
/// use cr_server::logging;
///
/// logging::init();
/// tracing::info!("Server starting");
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,tower_http=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log a successful content store mutation
///
/// # Arguments
///
/// * `kind` - Mutation kind, e.g. `tournament_added`
/// * `tournament_id` - Affected tournament, if any
pub fn log_content_mutation(kind: &str, tournament_id: Option<u64>) {
    tracing::info!(
        mutation = kind,
        tournament_id = tournament_id,
        "Content store mutated"
    );
}

/// Log performance metric
///
/// Operations slower than one second are logged at warn level.
///
/// ```
/// use cr_server::logging::log_performance;
/// use std::time::Instant;
///
/// let start = Instant::now();
/// // ... do work ...
/// log_performance("tournament_submit", start.elapsed().as_millis() as u64);
/// ```
pub fn log_performance(operation: &str, duration_ms: u64) {
    if duration_ms > 1000 {
        tracing::warn!(
            operation = operation,
            duration_ms = duration_ms,
            "PERFORMANCE: Slow operation"
        );
    } else {
        tracing::debug!(
            operation = operation,
            duration_ms = duration_ms,
            "Performance metric"
        );
    }
}

/// Log a rendered page
///
/// # Arguments
///
/// * `route` - Resolved route label
/// * `status_code` - Response status code
/// * `duration_ms` - Render duration in milliseconds
pub fn log_page_request(route: &str, status_code: u16, duration_ms: u64) {
    tracing::info!(
        route = route,
        http_status = status_code,
        duration_ms = duration_ms,
        "Page rendered"
    );
}
