//! Metrics for strata, recorded through the `metrics` crate facade.
//!
//! When the `prometheus` feature is enabled, metrics are exported in
//! Prometheus format. Without it every recording is a no-op.
//!
//! # Usage
//!
//! ```rust,ignore
//! use strata_metrics::{counter, discovery, labels};
//!
//! counter!(discovery::OBSERVATIONS_TOTAL, labels::OUTCOME => "base").increment(1);
//! ```
//!
//! # Features
//!
//! - `prometheus`: Install a Prometheus recorder in [`init_metrics`]

mod definitions;
mod error;
mod recorder;

pub use {
    definitions::*,
    error::{Error, Result},
    recorder::{MetricsHandle, MetricsRecorderConfig, init_metrics},
};

// Re-export metrics macros for convenience
pub use metrics::{counter, gauge, histogram};
