//! robots.txt endpoint.
//!
//! The proxy serves one-off preview images; crawlers have no business
//! walking the URL space and every hit costs a provider call.

use axum::http::header;

pub async fn robots_txt() -> ([(header::HeaderName, &'static str); 1], &'static str) {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        "User-agent: *\nDisallow: /\n",
    )
}
