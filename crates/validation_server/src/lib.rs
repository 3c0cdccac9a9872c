//! REST API server for the trade validator
//!
//! This crate exposes the `trade_validation` pipeline over HTTP: a batch of
//! trades is posted as a JSON array and the response lists every rule
//! violation found, or a fixed success message when there are none.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

// Re-export the validation kernel for integration
pub use trade_validation;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
