//! Metrics for the Shutter proxy.

pub mod http;
pub mod provider;
pub mod setup;

pub use setup::init_metrics;
