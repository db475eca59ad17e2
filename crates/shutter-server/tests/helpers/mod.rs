#![allow(dead_code)]

pub mod client;
pub mod provider;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;

use shutter_server::{AppState, ProviderConfig, ServerConfig, create_router_with_state};

pub use client::{TestClient, TestResponse};
pub use provider::MockProvider;

/// Cache TTL used by the test configuration.
pub const TEST_CACHE_TTL: u64 = 3600;

/// Builds a ServerConfig pointing at nothing real.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        addr: "127.0.0.1:0".parse().unwrap(),
        provider: ProviderConfig {
            access_key: "test-access".to_string(),
            secret_key: "test-secret".to_string(),
            base_url: "https://api.screenshotone.invalid".to_string(),
        },
        allowed_domain: "stagetimer.io".to_string(),
        cache_ttl: TEST_CACHE_TTL,
    }
}

/// Creates a TestClient backed by the given mock provider.
pub fn client_with_provider(provider: Arc<MockProvider>) -> TestClient {
    // build_recorder does not install globally, so every test can have its
    // own handle without fighting over the recorder slot
    let prometheus_handle = PrometheusBuilder::new().build_recorder().handle();

    let state = AppState::new(provider, test_config());
    TestClient::new(create_router_with_state(state, prometheus_handle))
}

/// Creates a TestClient with a mock provider that returns a stub image.
pub fn client() -> TestClient {
    client_with_provider(Arc::new(MockProvider::returning_image()))
}
