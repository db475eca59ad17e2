//! Shutter Core - URL resolution for the screenshot preview proxy
//!
//! This crate contains the pure, stateless heart of the proxy: turning an
//! incoming request URL into the absolute target URL to screenshot, deriving
//! the display filename for the resulting image, and parsing per-request
//! rendering overrides. Everything here is synchronous string manipulation
//! with no I/O, so each function is trivially safe to call concurrently.

pub mod error;
pub mod filename;
pub mod overrides;
pub mod request_url;
pub mod resolve;

pub use error::{Result, ShutterError};
pub use filename::derive_filename;
pub use overrides::{OVERRIDES_PARAM, ScreenshotOverrides};
pub use request_url::RequestUrl;
pub use resolve::{
    EncodedRequest, PATH_SEPARATOR_MARKER, PathForm, TARGET_PARAM, TargetSpec,
    encode_request_path, resolve,
};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
