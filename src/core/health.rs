//! Liveness and readiness reporting
//!
//! Readiness runs every registered [`ConnectivityProbe`] under a bounded
//! timeout and aggregates the outcomes; liveness never touches a dependency.

use crate::adapters::repository::ConnectivityProbe;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Aggregated or per-check health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    /// Check passed
    Healthy,
    /// Check failed or timed out
    Unhealthy,
}

impl HealthStatus {
    /// Text used in responses (`Healthy` / `Unhealthy`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Unhealthy => "Unhealthy",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single readiness check
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckEntry {
    pub name: String,
    pub status: HealthStatus,
    /// Failure message, `"none"` when the check passed
    pub exception: String,
    /// Elapsed time formatted as `hh:mm:ss.fffffff`
    pub duration: String,
}

/// Readiness report returned by `/health/ready`
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub checks: Vec<HealthCheckEntry>,
}

/// Runs connectivity probes for the readiness endpoint
pub struct HealthReporter {
    probes: Vec<Arc<dyn ConnectivityProbe>>,
    timeout: Duration,
}

impl HealthReporter {
    /// Create a reporter with the given per-check timeout
    pub fn new(timeout: Duration) -> Self {
        Self {
            probes: Vec::new(),
            timeout,
        }
    }

    /// Register a probe; checks run in registration order
    pub fn with_probe(mut self, probe: Arc<dyn ConnectivityProbe>) -> Self {
        self.probes.push(probe);
        self
    }

    /// Liveness: the process is up and serving
    pub fn liveness(&self) -> HealthStatus {
        HealthStatus::Healthy
    }

    /// Readiness: every probe must answer within the timeout
    pub async fn readiness(&self) -> HealthReport {
        let mut checks = Vec::with_capacity(self.probes.len());

        for probe in &self.probes {
            checks.push(self.run_check(probe.as_ref()).await);
        }

        let status = if checks.iter().all(|c| c.status.is_healthy()) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };

        HealthReport { status, checks }
    }

    async fn run_check(&self, probe: &dyn ConnectivityProbe) -> HealthCheckEntry {
        let started = Instant::now();
        let outcome = tokio::time::timeout(self.timeout, probe.test_connection()).await;
        let elapsed = started.elapsed();

        let (status, exception) = match outcome {
            Ok(Ok(())) => (HealthStatus::Healthy, "none".to_string()),
            Ok(Err(e)) => {
                tracing::warn!(check = probe.name(), error = %e, "Readiness check failed");
                (HealthStatus::Unhealthy, e.to_string())
            }
            Err(_) => {
                tracing::warn!(
                    check = probe.name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Readiness check timed out"
                );
                (
                    HealthStatus::Unhealthy,
                    format!(
                        "Connectivity check timed out after {}",
                        format_duration(self.timeout)
                    ),
                )
            }
        };

        HealthCheckEntry {
            name: probe.name().to_string(),
            status,
            exception,
            duration: format_duration(elapsed),
        }
    }
}

/// Format a duration as `hh:mm:ss.fffffff` (100 ns resolution)
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let ticks = duration.subsec_nanos() / 100;

    format!("{hours:02}:{minutes:02}:{seconds:02}.{ticks:07}")
}
