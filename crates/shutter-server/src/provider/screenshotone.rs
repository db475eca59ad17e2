//! ScreenshotOne API client.
//!
//! Requests to the `take` endpoint are signed: the full query string after
//! `take?` is HMAC-SHA256'd with the secret key and the result appended
//! hex-encoded as the `signature` parameter.

use async_trait::async_trait;
use bytes::Bytes;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::form_urlencoded;

use super::{ProviderError, ScreenshotProvider, TakeOptions};
use crate::config::ProviderConfig;

type HmacSha256 = Hmac<Sha256>;

/// HTTP client for the ScreenshotOne rendering API.
pub struct ScreenshotOne {
    http: reqwest::Client,
    access_key: String,
    secret_key: String,
    base_url: String,
}

impl ScreenshotOne {
    /// Creates a client from the provider configuration.
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_key: config.access_key.clone(),
            secret_key: config.secret_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the signed `take` URL for the given options.
    pub fn signed_take_url(&self, options: &TakeOptions) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("access_key", &self.access_key);
        for (key, value) in options.to_query_pairs() {
            serializer.append_pair(key, &value);
        }
        let query = serializer.finish();

        let signature = sign(&query, &self.secret_key);

        format!("{}/take?{}&signature={}", self.base_url, query, signature)
    }
}

/// Hex-encoded HMAC-SHA256 of the query string.
fn sign(query: &str, secret_key: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(query.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[async_trait]
impl ScreenshotProvider for ScreenshotOne {
    async fn fetch_image(&self, options: &TakeOptions) -> Result<Bytes, ProviderError> {
        let url = self.signed_take_url(options);

        tracing::debug!(target_url = %options.target_url(), "Requesting screenshot");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?)
    }
}
