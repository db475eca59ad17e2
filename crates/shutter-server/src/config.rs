//! Server configuration.
//!
//! Everything is read from the environment once at startup and passed down
//! explicitly; handlers never read env vars at call time.

use std::net::SocketAddr;

use anyhow::Context;

/// Default allowed hostname suffix for resolved targets.
const DEFAULT_ALLOWED_DOMAIN: &str = "stagetimer.io";

/// Default cache TTL: 30 days, used both for the provider-side cache and
/// the `Cache-Control: max-age` on proxied responses.
const DEFAULT_CACHE_TTL_SECS: u64 = 2_592_000;

/// Credentials and endpoint for the ScreenshotOne API.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub access_key: String,
    pub secret_key: String,
    pub base_url: String,
}

/// Runtime configuration for the proxy server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the server binds to.
    pub addr: SocketAddr,
    /// Provider credentials.
    pub provider: ProviderConfig,
    /// Hostname suffix a resolved target must end with.
    pub allowed_domain: String,
    /// Cache TTL in seconds.
    pub cache_ttl: u64,
}

impl ServerConfig {
    /// Loads the configuration from environment variables.
    ///
    /// `SCREENSHOTONE_ACCESS_KEY` and `SCREENSHOTONE_SECRET_KEY` are
    /// required; everything else has a default.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("SHUTTER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("SHUTTER_PORT")
            .unwrap_or_else(|_| "8787".to_string())
            .parse::<u16>()
            .context("SHUTTER_PORT must be a valid port number")?;

        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .context("Invalid bind address")?;

        let access_key = std::env::var("SCREENSHOTONE_ACCESS_KEY")
            .context("SCREENSHOTONE_ACCESS_KEY environment variable is required")?;
        let secret_key = std::env::var("SCREENSHOTONE_SECRET_KEY")
            .context("SCREENSHOTONE_SECRET_KEY environment variable is required")?;
        let base_url = std::env::var("SCREENSHOTONE_BASE_URL")
            .unwrap_or_else(|_| "https://api.screenshotone.com".to_string());

        let allowed_domain = std::env::var("SHUTTER_ALLOWED_DOMAIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_DOMAIN.to_string());

        let cache_ttl = match std::env::var("SHUTTER_CACHE_TTL") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("SHUTTER_CACHE_TTL must be a number of seconds")?,
            Err(_) => DEFAULT_CACHE_TTL_SECS,
        };

        Ok(Self {
            addr,
            provider: ProviderConfig {
                access_key,
                secret_key,
                base_url,
            },
            allowed_domain,
            cache_ttl,
        })
    }

    /// Returns true if the given hostname is inside the allowed domain.
    ///
    /// Suffix match, so subdomains of the allowed domain pass.
    pub fn is_host_allowed(&self, host: &str) -> bool {
        host.ends_with(&self.allowed_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(allowed_domain: &str) -> ServerConfig {
        ServerConfig {
            addr: "127.0.0.1:0".parse().unwrap(),
            provider: ProviderConfig {
                access_key: "ak".to_string(),
                secret_key: "sk".to_string(),
                base_url: "https://api.screenshotone.com".to_string(),
            },
            allowed_domain: allowed_domain.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL_SECS,
        }
    }

    #[test]
    fn test_allowed_domain_suffix_match() {
        let config = test_config("stagetimer.io");

        assert!(config.is_host_allowed("stagetimer.io"));
        assert!(config.is_host_allowed("app.stagetimer.io"));
        assert!(!config.is_host_allowed("evil.example"));
        assert!(!config.is_host_allowed("stagetimer.io.evil.example"));
    }
}
