//! navguard embedding layer.
//!
//! Wires the whitelist policy into an embedded browser surface: config
//! loading, per-container sessions, the host view seam, the bridge command
//! dispatcher and decision metrics. Consumed by the `navguard-embed` binary
//! and by integration tests.

pub mod config;
pub mod dispatch;
pub mod host;
pub mod obs;
pub mod session;
