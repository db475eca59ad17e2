//! Screenshot provider abstraction.
//!
//! The proxy treats the rendering service as an external collaborator: a
//! capability that takes a target URL plus options and returns image bytes.
//! Handlers depend on the [`ScreenshotProvider`] trait so tests can swap in
//! a mock without touching the network.

mod options;
mod screenshotone;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use options::TakeOptions;
pub use screenshotone::ScreenshotOne;

/// Errors from the screenshot provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status.
    #[error("screenshot service responded with status {status}")]
    Upstream {
        /// HTTP status returned by the provider
        status: u16,
    },

    /// The request to the provider could not be completed.
    #[error("screenshot service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Capability to render a page into an image.
#[async_trait]
pub trait ScreenshotProvider: Send + Sync {
    /// Fetches a rendered screenshot for the given options.
    async fn fetch_image(&self, options: &TakeOptions) -> Result<Bytes, ProviderError>;
}
