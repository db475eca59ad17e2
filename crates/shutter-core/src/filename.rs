//! Display filename derivation for `Content-Disposition`.

use crate::request_url::RequestUrl;
use crate::resolve::{IMAGE_EXTENSION, PATH_SEPARATOR_MARKER};

/// Derives the display filename for the screenshot of a request.
///
/// Total and independent of query parsing: always returns a non-empty
/// string, never fails.
///
/// - Path already ends with `.jpg` - its basename (the fully-specified case)
/// - Encoded path (contains `__`) - the whole path plus `.jpg`, so the
///   filename preserves the full target identity
/// - Literal multi-segment path - `first__last.jpg`, a compact join of
///   domain and final path component reusing the `__` convention
/// - Single segment - the path plus `.jpg`
///
/// # Example
///
/// ```
/// use shutter_core::{RequestUrl, derive_filename};
///
/// let request = RequestUrl::new("/stagetimer.io/pricing", "");
/// assert_eq!(derive_filename(&request), "stagetimer.io__pricing.jpg");
/// ```
pub fn derive_filename(request: &RequestUrl) -> String {
    let path = request.path().strip_prefix('/').unwrap_or(request.path());

    if path.ends_with(IMAGE_EXTENSION) {
        let basename = path.rsplit('/').next().unwrap_or(path);
        return basename.to_string();
    }

    if path.contains(PATH_SEPARATOR_MARKER) {
        return format!("{}{}", path, IMAGE_EXTENSION);
    }

    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() > 1 {
        return format!(
            "{}{}{}{}",
            segments[0],
            PATH_SEPARATOR_MARKER,
            segments[segments.len() - 1],
            IMAGE_EXTENSION
        );
    }

    format!("{}{}", path, IMAGE_EXTENSION)
}
