//! Shutter proxy server binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use shutter_server::{AppState, ServerConfig, run_server_with_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    tracing::info!("Starting Shutter proxy v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Allowed domain: {}", config.allowed_domain);
    tracing::info!("Cache TTL: {}s", config.cache_ttl);

    // Metrics recorder must be installed before the first request
    let prometheus_handle = shutter_server::metrics::init_metrics();

    let addr = config.addr;
    let state = AppState::with_screenshotone(config);

    run_server_with_state(addr, state, prometheus_handle).await?;

    Ok(())
}
