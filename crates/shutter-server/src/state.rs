//! Application state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::provider::{ScreenshotOne, ScreenshotProvider};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The screenshot rendering capability.
    provider: Arc<dyn ScreenshotProvider>,
    /// Runtime configuration, fixed at startup.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Creates a new AppState with the given provider and configuration.
    pub fn new(provider: Arc<dyn ScreenshotProvider>, config: ServerConfig) -> Self {
        Self {
            provider,
            config: Arc::new(config),
        }
    }

    /// Creates an AppState backed by the ScreenshotOne client.
    pub fn with_screenshotone(config: ServerConfig) -> Self {
        let provider = Arc::new(ScreenshotOne::new(&config.provider));
        Self::new(provider, config)
    }

    /// Returns a reference to the screenshot provider.
    pub fn provider(&self) -> &dyn ScreenshotProvider {
        self.provider.as_ref()
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
