//! Metrics setup and initialization.

use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

/// Initializes the metrics recorder and returns the handle for the
/// /metrics endpoint.
pub fn init_metrics() -> PrometheusHandle {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();

    // Histogram buckets in seconds. Provider fetches dominate, so the
    // range leans towards whole seconds.
    let handle = builder
        .set_buckets(&[
            0.001, // 1 millisecond
            0.005, // 5 milliseconds
            0.01,  // 10 milliseconds
            0.05,  // 50 milliseconds
            0.1,   // 100 milliseconds
            0.25,  // 250 milliseconds
            0.5,   // 500 milliseconds
            1.0,   // 1 second
            2.5,   // 2.5 seconds
            5.0,   // 5 seconds
            10.0,  // 10 seconds
            30.0,  // 30 seconds
        ])
        .expect("failed to set histogram buckets")
        .install_recorder()
        .expect("failed to install metrics recorder");

    crate::metrics::http::register_http_metrics();
    crate::metrics::provider::register_provider_metrics();

    info!("Metrics system initialized");
    handle
}
