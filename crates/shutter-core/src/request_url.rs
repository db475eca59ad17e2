//! Parsed view of an incoming request URL.

use url::form_urlencoded;

/// Immutable decomposition of a request URL into path and query.
///
/// Query pairs keep their arrival order. Lookups follow standard
/// query-string semantics: on duplicate keys, the last value wins.
///
/// # Example
///
/// ```
/// use shutter_core::RequestUrl;
///
/// let request = RequestUrl::new("/stagetimer.io__pricing.jpg", "v=2");
/// assert_eq!(request.path(), "/stagetimer.io__pricing.jpg");
/// assert_eq!(request.query_get("v"), Some("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    path: String,
    raw_query: String,
    query: Vec<(String, String)>,
}

impl RequestUrl {
    /// Creates a RequestUrl from a path and a raw query string (without the
    /// leading `?`). The path is normalized to always start with `/`.
    pub fn new(path: impl Into<String>, raw_query: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }

        let raw_query = raw_query.into();
        let query = form_urlencoded::parse(raw_query.as_bytes())
            .into_owned()
            .collect();

        Self {
            path,
            raw_query,
            query,
        }
    }

    /// Returns the request path. Always starts with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the raw query string as it arrived, without the leading `?`.
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// Returns the decoded query pairs in arrival order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Looks up a query parameter. Last value wins on duplicate keys.
    pub fn query_get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Re-serializes the query with every occurrence of the given keys
    /// removed. Returns None when nothing remains.
    pub fn query_without(&self, excluded: &[&str]) -> Option<String> {
        let retained: Vec<_> = self
            .query
            .iter()
            .filter(|(k, _)| !excluded.contains(&k.as_str()))
            .collect();

        if retained.is_empty() {
            return None;
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in retained {
            serializer.append_pair(key, value);
        }
        Some(serializer.finish())
    }
}
