//! Lightweight in-process metrics (dependency-free).
//!
//! Counts navigation decisions and whitelist updates as atomics keyed by
//! labels, rendered in Prometheus text format on demand.

pub mod metrics;

pub use metrics::{CounterVec, NavMetrics};
