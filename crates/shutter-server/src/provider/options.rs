//! Screenshot capture options.

use shutter_core::ScreenshotOverrides;

/// Options for a single screenshot capture, expressed as the query
/// parameters of the provider's `take` endpoint.
///
/// Defaults are tuned for link-preview images: 1200x627 viewport, ads and
/// cookie banners blocked, provider-side caching on.
#[derive(Debug, Clone, PartialEq)]
pub struct TakeOptions {
    url: String,
    format: &'static str,
    viewport_width: u64,
    viewport_height: u64,
    device_scale_factor: f64,
    scroll_into_view: String,
    block_ads: bool,
    block_cookie_banners: bool,
    block_banners_by_heuristics: bool,
    block_trackers: bool,
    cache: bool,
    cache_ttl: u64,
    cache_key: String,
}

impl TakeOptions {
    /// Creates options for the given target URL with default rendering
    /// parameters. The cache key defaults to the URL itself.
    pub fn url(url: impl Into<String>) -> Self {
        let url = url.into();
        let cache_key = url.clone();

        Self {
            url,
            format: "jpg",
            viewport_width: 1200,
            viewport_height: 627,
            device_scale_factor: 1.0,
            scroll_into_view: "main".to_string(),
            block_ads: true,
            block_cookie_banners: true,
            block_banners_by_heuristics: true,
            block_trackers: true,
            cache: true,
            cache_ttl: 2_592_000,
            cache_key,
        }
    }

    pub fn viewport_width(mut self, width: u64) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn viewport_height(mut self, height: u64) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn device_scale_factor(mut self, factor: f64) -> Self {
        self.device_scale_factor = factor;
        self
    }

    pub fn scroll_into_view(mut self, selector: impl Into<String>) -> Self {
        self.scroll_into_view = selector.into();
        self
    }

    pub fn cache_ttl(mut self, seconds: u64) -> Self {
        self.cache_ttl = seconds;
        self
    }

    pub fn cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = key.into();
        self
    }

    /// Applies the recognized per-request overrides on top of the current
    /// options. Unknown override keys are ignored here.
    pub fn apply_overrides(mut self, overrides: &ScreenshotOverrides) -> Self {
        if let Some(width) = overrides.viewport_width() {
            self = self.viewport_width(width);
        }
        if let Some(height) = overrides.viewport_height() {
            self = self.viewport_height(height);
        }
        if let Some(factor) = overrides.device_scale_factor() {
            self = self.device_scale_factor(factor);
        }
        if let Some(selector) = overrides.scroll_into_view() {
            self = self.scroll_into_view(selector);
        }
        if let Some(key) = overrides.cache_key() {
            self = self.cache_key(key);
        }
        self
    }

    /// Returns the target URL being captured.
    pub fn target_url(&self) -> &str {
        &self.url
    }

    /// Returns the cache key for this capture.
    pub fn cache_key_value(&self) -> &str {
        &self.cache_key
    }

    /// Renders the options as ordered query pairs for the `take` endpoint.
    /// The order is stable so signing is deterministic.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("url", self.url.clone()),
            ("format", self.format.to_string()),
            ("block_ads", self.block_ads.to_string()),
            ("block_cookie_banners", self.block_cookie_banners.to_string()),
            (
                "block_banners_by_heuristics",
                self.block_banners_by_heuristics.to_string(),
            ),
            ("block_trackers", self.block_trackers.to_string()),
            ("device_scale_factor", format_number(self.device_scale_factor)),
            ("viewport_width", self.viewport_width.to_string()),
            ("viewport_height", self.viewport_height.to_string()),
            ("scroll_into_view", self.scroll_into_view.clone()),
            ("cache", self.cache.to_string()),
            ("cache_ttl", self.cache_ttl.to_string()),
            ("cache_key", self.cache_key.clone()),
        ]
    }
}

/// Renders whole numbers without a trailing `.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_preview_profile() {
        let options = TakeOptions::url("https://stagetimer.io/pricing");
        let pairs = options.to_query_pairs();

        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(get("format"), "jpg");
        assert_eq!(get("viewport_width"), "1200");
        assert_eq!(get("viewport_height"), "627");
        assert_eq!(get("device_scale_factor"), "1");
        assert_eq!(get("scroll_into_view"), "main");
        assert_eq!(get("cache"), "true");
        assert_eq!(get("cache_ttl"), "2592000");
        // Cache key defaults to the target URL
        assert_eq!(get("cache_key"), "https://stagetimer.io/pricing");
    }

    #[test]
    fn test_apply_overrides() {
        let overrides = shutter_core::ScreenshotOverrides::parse(Some(
            r#"{"viewport_width":960,"viewport_height":550,"device_scale_factor":2,"cache_key":"k1"}"#,
        ))
        .unwrap();

        let options =
            TakeOptions::url("https://stagetimer.io/stats").apply_overrides(&overrides);
        let pairs = options.to_query_pairs();

        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(get("viewport_width"), "960");
        assert_eq!(get("viewport_height"), "550");
        assert_eq!(get("device_scale_factor"), "2");
        assert_eq!(get("cache_key"), "k1");
        // Untouched keys keep their defaults
        assert_eq!(get("scroll_into_view"), "main");
    }

    #[test]
    fn test_fractional_scale_factor_is_preserved() {
        let options = TakeOptions::url("https://x").device_scale_factor(1.5);
        let pairs = options.to_query_pairs();

        let factor = pairs
            .iter()
            .find(|(k, _)| *k == "device_scale_factor")
            .unwrap();
        assert_eq!(factor.1, "1.5");
    }
}
