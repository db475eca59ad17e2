//! Error types for the Shutter core.
//!
//! The core is pure computation, so the taxonomy is small: either no target
//! URL could be derived from the request, or the overrides payload did not
//! parse. Both are signals for the caller to reject the request; neither is
//! ever a process-level failure.

use thiserror::Error;

/// Main error type for Shutter core operations.
#[derive(Debug, Error)]
pub enum ShutterError {
    /// No usable target URL could be derived from the query or the path.
    /// The caller must reject the request with a client error.
    #[error("no target URL could be derived from the request")]
    TargetAbsent,

    /// The `screenshotone` query value failed to parse as a JSON object.
    /// The caller must reject before any provider call is made; falling
    /// back to defaults silently is not allowed.
    #[error("invalid overrides payload: {reason}")]
    InvalidOverridesPayload {
        /// Why the payload was rejected
        reason: String,
    },

    /// The input to path encoding was not a well-formed absolute URL.
    #[error("invalid target URL '{url}': {reason}")]
    InvalidTargetUrl {
        /// The URL that failed to parse
        url: String,
        /// Why it's invalid
        reason: String,
    },
}

impl ShutterError {
    /// Creates an InvalidOverridesPayload error.
    pub fn invalid_overrides(reason: impl Into<String>) -> Self {
        Self::InvalidOverridesPayload {
            reason: reason.into(),
        }
    }

    /// Creates an InvalidTargetUrl error.
    pub fn invalid_target_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTargetUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error indicates no target could be derived.
    pub fn is_target_absent(&self) -> bool {
        matches!(self, Self::TargetAbsent)
    }

    /// Returns true if this is an overrides parse failure.
    pub fn is_invalid_overrides(&self) -> bool {
        matches!(self, Self::InvalidOverridesPayload { .. })
    }
}

/// Type alias for Results with ShutterError.
pub type Result<T> = std::result::Result<T, ShutterError>;
