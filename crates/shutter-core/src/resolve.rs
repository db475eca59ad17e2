//! Target URL resolution.
//!
//! A request can name the page to screenshot in three ways, tried in order:
//!
//! 1. `?url=https://...` - legacy query parameter, taken verbatim
//! 2. `/stagetimer.io__pricing.jpg` - encoded path, `__` stands in for `/`
//! 3. `/stagetimer.io/pricing.jpg` - literal path, real `/` separators
//!
//! The resolver only performs string manipulation. It never validates that
//! the resolved string is a well-formed URL or that the host is allowed;
//! both checks belong to the caller.

use url::Url;

use crate::error::{Result, ShutterError};
use crate::overrides::OVERRIDES_PARAM;
use crate::request_url::RequestUrl;

/// Marker used in encoded paths as a stand-in for `/`.
///
/// There is no escape for a literal double underscore in a source path
/// segment; the encoding is knowingly lossy there.
pub const PATH_SEPARATOR_MARKER: &str = "__";

/// Query parameter naming the target URL directly (legacy format).
pub const TARGET_PARAM: &str = "url";

/// Extension stripped from the request path and appended to filenames.
pub(crate) const IMAGE_EXTENSION: &str = ".jpg";

/// Outcome of target resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    /// No usable URL could be derived from query or path.
    Absent,
    /// The canonical absolute URL to screenshot.
    Resolved(String),
}

impl TargetSpec {
    /// Returns true if no target could be derived.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the resolved URL, if any.
    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Resolved(url) => Some(url),
        }
    }

    /// Converts into a Result, with Absent becoming [`ShutterError::TargetAbsent`].
    pub fn into_result(self) -> Result<String> {
        match self {
            Self::Absent => Err(ShutterError::TargetAbsent),
            Self::Resolved(url) => Ok(url),
        }
    }
}

/// The two conventions a request path can arrive in.
///
/// Classification is a single predicate: any occurrence of `__` makes the
/// path encoded, even if it also contains real `/` separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathForm {
    /// The path reproduces the target's structure with real `/` separators.
    Literal(String),
    /// `/` separators were substituted with `__` to form a single segment.
    Encoded(String),
}

impl PathForm {
    /// Classifies a request path (leading slash and extension already stripped).
    pub fn classify(path: &str) -> Self {
        if path.contains(PATH_SEPARATOR_MARKER) {
            Self::Encoded(path.to_string())
        } else {
            Self::Literal(path.to_string())
        }
    }

    /// Recovers the literal host-plus-path string. Total: literal paths
    /// pass through untouched, encoded paths have every `__` replaced.
    pub fn decode(self) -> String {
        match self {
            Self::Literal(path) => path,
            Self::Encoded(path) => path.replace(PATH_SEPARATOR_MARKER, "/"),
        }
    }

    /// Encodes a literal host-plus-path string into a single path segment.
    /// Inverse of [`PathForm::decode`] for inputs free of `__`.
    pub fn encode(path: &str) -> String {
        path.replace('/', PATH_SEPARATOR_MARKER)
    }
}

/// Resolves the canonical target URL from a request URL.
///
/// A non-empty `url` query parameter always wins and is returned verbatim,
/// bypassing all path logic. Otherwise the path is stripped, classified,
/// decoded and prefixed with `https://`; any query parameters other than
/// the control parameters (`url`, `screenshotone`) are carried over onto
/// the target.
pub fn resolve(request: &RequestUrl) -> TargetSpec {
    // Legacy format has priority
    if let Some(target) = request.query_get(TARGET_PARAM)
        && !target.is_empty()
    {
        return TargetSpec::Resolved(target.to_string());
    }

    let path = request.path().strip_prefix('/').unwrap_or(request.path());

    // A `/.jpg` suffix keeps its trailing slash, so directory-style targets
    // like `output/<id>/` survive the strip.
    let path = path.strip_suffix(IMAGE_EXTENSION).unwrap_or(path);

    if path.is_empty() {
        return TargetSpec::Absent;
    }

    let mut target = format!("https://{}", PathForm::classify(path).decode());

    if let Some(query) = request.query_without(&[TARGET_PARAM, OVERRIDES_PARAM]) {
        target.push('?');
        target.push_str(&query);
    }

    TargetSpec::Resolved(target)
}

/// A target URL converted to the proxy's request format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    /// Request path in encoded form, e.g. `/stagetimer.io__pricing.jpg`.
    pub path: String,
    /// Query string to carry over, without the leading `?`.
    pub query: Option<String>,
    /// Display filename the proxy will derive for this request.
    pub filename: String,
}

impl EncodedRequest {
    /// Renders the full request URI (path plus query).
    pub fn to_uri(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

/// Converts an absolute target URL into the encoded request format, the
/// inverse of [`resolve`] for the path-based convention.
///
/// The target's own query parameters are carried over; when an overrides
/// JSON blob is supplied it is validated and appended as the
/// `screenshotone` parameter. Fails on non-HTTP(S) or relative input.
pub fn encode_request_path(target: &str, overrides_json: Option<&str>) -> Result<EncodedRequest> {
    let parsed = Url::parse(target)
        .map_err(|e| ShutterError::invalid_target_url(target, e.to_string()))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| ShutterError::invalid_target_url(target, "missing host"))?;

    let mut full_path = format!("{}{}", host, parsed.path());

    // Trailing slash makes for an ugly `__` tail in the filename
    if full_path.ends_with('/') {
        full_path.pop();
    }

    // Overrides must be valid before they are embedded
    crate::overrides::ScreenshotOverrides::parse(overrides_json)?;

    let encoded = PathForm::encode(&full_path);
    let filename = format!("{}{}", encoded, IMAGE_EXTENSION);

    let mut pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if let Some(json) = overrides_json {
        pairs.push((OVERRIDES_PARAM.to_string(), json.to_string()));
    }

    let query = if pairs.is_empty() {
        None
    } else {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &pairs {
            serializer.append_pair(key, value);
        }
        Some(serializer.finish())
    };

    Ok(EncodedRequest {
        path: format!("/{}", filename),
        query,
        filename,
    })
}
