//! Shutter Server - HTTP edge proxy for screenshot previews
//!
//! Thin glue around `shutter-core`: an Axum server that resolves the target
//! URL from each incoming request, asks the screenshot provider for a
//! rendered image, and proxies the bytes back with caching headers.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod provider;
pub mod server;
pub mod state;

pub use config::{ProviderConfig, ServerConfig};
pub use error::AppError;
pub use handlers::health::HealthResponse;
pub use server::{create_router, create_router_with_state, run_server_with_state};
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
