//! Provider fetch metrics recording.

use std::time::Duration;

use bytes::Bytes;
use metrics::{counter, histogram};

use crate::provider::ProviderError;

/// Registers the provider metrics. Call once at startup.
pub fn register_provider_metrics() {
    metrics::describe_counter!(
        "shutter_provider_fetches_total",
        "Total number of screenshot provider fetches"
    );
    metrics::describe_histogram!(
        "shutter_provider_fetch_duration_seconds",
        "Time spent waiting on the screenshot provider"
    );
    metrics::describe_histogram!(
        "shutter_provider_image_bytes",
        "Size of proxied screenshot images in bytes"
    );
}

/// Records the outcome of one provider fetch.
pub fn record_fetch(result: &Result<Bytes, ProviderError>, duration: Duration) {
    let outcome = match result {
        Ok(_) => "success",
        Err(ProviderError::Upstream { .. }) => "upstream_error",
        Err(ProviderError::Transport(_)) => "transport_error",
    };

    counter!(
        "shutter_provider_fetches_total",
        "outcome" => outcome
    )
    .increment(1);

    histogram!("shutter_provider_fetch_duration_seconds").record(duration.as_secs_f64());

    if let Ok(image) = result {
        histogram!("shutter_provider_image_bytes").record(image.len() as f64);
    }
}
