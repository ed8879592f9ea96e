//! HTTP server for option gamma profiles
//!
//! This crate serves a single contract's gamma-vs-spot curve as a
//! server-rendered HTML page with an embedded SVG chart, plus the usual
//! health endpoints.

pub mod chart;
pub mod config;
pub mod render;
pub mod routes;
pub mod server;

// Re-export pricing dependencies for integration
pub use greeks_core;
pub use greeks_models;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
