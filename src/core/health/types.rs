//! Health status types and check results

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

/// Health check result
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResult {
    /// Whether the probe succeeded
    pub healthy: bool,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Timestamp of the check
    pub timestamp: DateTime<Utc>,
    /// Error message if unhealthy
    pub error: Option<String>,
}

impl HealthCheckResult {
    /// Create a healthy result
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            healthy: true,
            response_time_ms,
            timestamp: Utc::now(),
            error: None,
        }
    }

    /// Create an unhealthy result
    pub fn unhealthy(error: impl Into<String>, response_time_ms: u64) -> Self {
        Self {
            healthy: false,
            response_time_ms,
            timestamp: Utc::now(),
            error: Some(error.into()),
        }
    }

    /// Fold the results of several instances of one provider into one
    ///
    /// Healthy only if every instance is healthy; the response time is the
    /// slowest instance.
    pub fn combine(results: Vec<HealthCheckResult>) -> Option<Self> {
        let response_time_ms = results.iter().map(|r| r.response_time_ms).max()?;
        let errors: Vec<String> = results.into_iter().filter_map(|r| r.error).collect();

        Some(if errors.is_empty() {
            Self::healthy(response_time_ms)
        } else {
            Self::unhealthy(errors.join("; "), response_time_ms)
        })
    }
}

/// Provider health information
#[derive(Debug, Clone, Serialize)]
pub struct ProviderHealth {
    /// Current health
    pub healthy: bool,
    /// When the provider was last checked (None = never)
    pub last_check: Option<DateTime<Utc>>,
    /// Response time of the last check
    pub response_time_ms: u64,
    /// Number of consecutive failed checks
    pub consecutive_failures: u32,
    /// Error reported by the last failed check
    pub last_error: Option<String>,
    #[serde(skip)]
    checked_at: Option<Instant>,
}

impl Default for ProviderHealth {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderHealth {
    /// Unchecked providers start out healthy so they are eligible for resolution
    pub fn new() -> Self {
        Self {
            healthy: true,
            last_check: None,
            response_time_ms: 0,
            consecutive_failures: 0,
            last_error: None,
            checked_at: None,
        }
    }

    /// Update with new health check result
    pub fn update(&mut self, result: &HealthCheckResult) {
        self.healthy = result.healthy;
        self.last_check = Some(result.timestamp);
        self.response_time_ms = result.response_time_ms;
        self.checked_at = Some(Instant::now());

        if result.healthy {
            self.consecutive_failures = 0;
            self.last_error = None;
        } else {
            self.consecutive_failures = self.consecutive_failures.saturating_add(1);
            self.last_error = result.error.clone();
        }
    }

    /// Whether the last check is recent enough to be trusted without re-checking
    pub fn is_fresh(&self, staleness: Duration) -> bool {
        self.checked_at
            .is_some_and(|checked_at| checked_at.elapsed() < staleness)
    }
}
