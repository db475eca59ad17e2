//! Screenshot proxy endpoint.
//!
//! Catch-all GET handler: the whole request URL describes the page to
//! capture, either as `/?url=https://...` or as the path-based
//! `/{encodedOrLiteralPath}.jpg[?query]` convention. The handler resolves
//! the target, checks it against the allowed domain, asks the provider for
//! the rendered image and proxies the bytes back with caching headers.

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{StatusCode, Uri, header},
    response::Response,
};
use tracing::instrument;
use url::Url;

use shutter_core::{
    OVERRIDES_PARAM, RequestUrl, ScreenshotOverrides, TargetSpec, derive_filename, resolve,
};

use crate::error::AppError;
use crate::metrics::provider::record_fetch;
use crate::provider::TakeOptions;
use crate::state::AppState;

/// Handler for GET on any path not claimed by another route.
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn take_screenshot(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let request_url = RequestUrl::new(uri.path(), uri.query().unwrap_or(""));

    // Overrides are validated before anything else; a bad blob fails the
    // whole request without a provider call.
    let overrides = ScreenshotOverrides::parse(request_url.query_get(OVERRIDES_PARAM))
        .map_err(|e| AppError::InvalidOverrides(e.to_string()))?;

    let target = match resolve(&request_url) {
        TargetSpec::Resolved(url) => url,
        TargetSpec::Absent => return Err(AppError::MissingTarget),
    };

    // The resolver is pure string manipulation; well-formedness and the
    // domain allow-list are enforced here.
    let mut parsed = Url::parse(&target).map_err(|_| AppError::InvalidTarget(target.clone()))?;
    let host = parsed.host_str().unwrap_or_default().to_string();
    if !state.config().is_host_allowed(&host) {
        tracing::warn!(host = %host, "Rejected target outside allowed domain");
        return Err(AppError::ForbiddenDomain { host });
    }

    tracing::info!(target = %target, "Resolved screenshot target");

    // Suppress cookie banners on the captured page itself
    parsed.query_pairs_mut().append_pair("cookie_banner", "0");

    let options = TakeOptions::url(parsed.as_str())
        .cache_ttl(state.config().cache_ttl)
        .cache_key(target.as_str())
        .apply_overrides(&overrides);

    let start = Instant::now();
    let result = state.provider().fetch_image(&options).await;
    record_fetch(&result, start.elapsed());
    let image = result?;

    let filename = derive_filename(&request_url);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/jpeg")
        .header(
            header::CACHE_CONTROL,
            format!("public, max-age={}", state.config().cache_ttl),
        )
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", filename),
        )
        .body(Body::from(image))
        .map_err(|e| AppError::Internal(e.to_string()))
}
