//! Mock screenshot provider for integration tests.

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use shutter_server::provider::{ProviderError, ScreenshotProvider, TakeOptions};

/// Stub JPEG payload: SOI marker plus filler.
pub const STUB_IMAGE: &[u8] = b"\xFF\xD8\xFFstub-jpeg-bytes";

enum MockBehavior {
    Image,
    Upstream(u16),
}

/// Provider double that records every call and returns a canned response.
pub struct MockProvider {
    behavior: MockBehavior,
    calls: Mutex<Vec<TakeOptions>>,
}

impl MockProvider {
    /// Mock that always succeeds with [`STUB_IMAGE`].
    pub fn returning_image() -> Self {
        Self {
            behavior: MockBehavior::Image,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock that always fails with the given upstream status.
    pub fn returning_upstream_error(status: u16) -> Self {
        Self {
            behavior: MockBehavior::Upstream(status),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Options captured from every fetch, in call order.
    pub fn calls(&self) -> Vec<TakeOptions> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of fetches performed.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ScreenshotProvider for MockProvider {
    async fn fetch_image(&self, options: &TakeOptions) -> Result<Bytes, ProviderError> {
        self.calls.lock().unwrap().push(options.clone());

        match self.behavior {
            MockBehavior::Image => Ok(Bytes::from_static(STUB_IMAGE)),
            MockBehavior::Upstream(status) => Err(ProviderError::Upstream { status }),
        }
    }
}
