//! Registry configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level registry configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistryConfig {
    /// Background health monitoring
    #[serde(default)]
    pub health: HealthMonitorConfig,
    /// Capability resolution
    #[serde(default)]
    pub resolver: ResolverConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Statically configured providers
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

impl RegistryConfig {
    /// Configuration with background monitoring switched off
    pub fn without_monitoring() -> Self {
        Self {
            health: HealthMonitorConfig {
                enabled: false,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Merge registry configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.health = self.health.merge(other.health);
        self.resolver = self.resolver.merge(other.resolver);
        self.logging = self.logging.merge(other.logging);
        if !other.providers.is_empty() {
            self.providers = other.providers;
        }
        self
    }
}

/// Health monitor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMonitorConfig {
    /// Whether the background monitor runs
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Interval between sweeps in milliseconds
    #[serde(default = "default_health_interval_ms")]
    pub interval_ms: u64,
    /// Timeout for an individual health check in milliseconds
    #[serde(default = "default_check_timeout_ms")]
    pub check_timeout_ms: u64,
}

impl Default for HealthMonitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: default_health_interval_ms(),
            check_timeout_ms: default_check_timeout_ms(),
        }
    }
}

impl HealthMonitorConfig {
    /// Interval between sweeps
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Timeout for an individual health check
    pub fn check_timeout(&self) -> Duration {
        Duration::from_millis(self.check_timeout_ms)
    }

    /// Merge health monitor configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.interval_ms != default_health_interval_ms() {
            self.interval_ms = other.interval_ms;
        }
        if other.check_timeout_ms != default_check_timeout_ms() {
            self.check_timeout_ms = other.check_timeout_ms;
        }
        self
    }
}

/// Resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// How long a resolution decision is reused, in milliseconds
    #[serde(default = "default_cache_ttl_ms")]
    pub cache_ttl_ms: u64,
    /// Age after which recorded health is re-checked during resolution, in milliseconds
    #[serde(default = "default_health_staleness_ms")]
    pub health_staleness_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cache_ttl_ms: default_cache_ttl_ms(),
            health_staleness_ms: default_health_staleness_ms(),
        }
    }
}

impl ResolverConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    pub fn health_staleness(&self) -> Duration {
        Duration::from_millis(self.health_staleness_ms)
    }

    /// Merge resolver configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.cache_ttl_ms != default_cache_ttl_ms() {
            self.cache_ttl_ms = other.cache_ttl_ms;
        }
        if other.health_staleness_ms != default_health_staleness_ms() {
            self.health_staleness_ms = other.health_staleness_ms;
        }
        self
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Merge logging configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.level != default_log_level() {
            self.level = other.level;
        }
        if other.json {
            self.json = other.json;
        }
        self
    }
}
