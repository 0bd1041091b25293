//! Core service logic for the catalog.
//!
//! # Modules
//!
//! - [`health`] - Liveness and readiness reporting over the storage probes

pub mod health;

pub use health::{format_duration, HealthCheckEntry, HealthReport, HealthReporter, HealthStatus};
