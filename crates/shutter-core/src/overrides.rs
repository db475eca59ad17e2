//! Per-request rendering overrides.
//!
//! Callers can tune screenshot rendering for a single request through the
//! `screenshotone` query parameter, which holds a JSON object. The mapping
//! is open: only the five recognized keys carry defined semantics
//! downstream, unknown keys are carried but ignored by consumers.

use serde_json::{Map, Value};

use crate::error::{Result, ShutterError};

/// Query parameter holding the JSON overrides blob. Stripped from the
/// query before target resolution so it never leaks into the target URL.
pub const OVERRIDES_PARAM: &str = "screenshotone";

/// Open mapping of rendering overrides parsed from the `screenshotone`
/// query parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenshotOverrides {
    values: Map<String, Value>,
}

impl ScreenshotOverrides {
    /// Parses the raw query value.
    ///
    /// An absent value yields the empty mapping. A present value that is
    /// not valid JSON object text is a hard input error; the whole request
    /// must be rejected, never silently defaulted.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let value: Value =
            serde_json::from_str(raw).map_err(|e| ShutterError::invalid_overrides(e.to_string()))?;

        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(ShutterError::invalid_overrides(format!(
                "expected a JSON object, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Returns true if no overrides were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Viewport width in pixels.
    pub fn viewport_width(&self) -> Option<u64> {
        self.values.get("viewport_width").and_then(Value::as_u64)
    }

    /// Viewport height in pixels.
    pub fn viewport_height(&self) -> Option<u64> {
        self.values.get("viewport_height").and_then(Value::as_u64)
    }

    /// Device scale factor (1 = normal, 2 = retina).
    pub fn device_scale_factor(&self) -> Option<f64> {
        self.values.get("device_scale_factor").and_then(Value::as_f64)
    }

    /// CSS selector to scroll into view before capturing.
    pub fn scroll_into_view(&self) -> Option<&str> {
        self.values.get("scroll_into_view").and_then(Value::as_str)
    }

    /// Provider-side cache key for this capture.
    pub fn cache_key(&self) -> Option<&str> {
        self.values.get("cache_key").and_then(Value::as_str)
    }

    /// Raw access to the underlying mapping, unknown keys included.
    pub fn as_inner(&self) -> &Map<String, Value> {
        &self.values
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
