//! HTTP request handlers.

pub mod health;
pub mod metrics;
pub mod robots;
pub mod screenshot;
