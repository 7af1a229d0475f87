//! Configuration data models
//!
//! This module defines all configuration structures used by the registry.

pub mod provider;
pub mod registry;

pub use provider::*;
pub use registry::*;

/// Default health monitor interval (30 seconds)
pub fn default_health_interval_ms() -> u64 {
    30_000
}

/// Default health check timeout (5 seconds)
pub fn default_check_timeout_ms() -> u64 {
    5_000
}

/// Default resolution cache TTL (30 seconds)
pub fn default_cache_ttl_ms() -> u64 {
    30_000
}

/// Default age after which recorded health is considered stale (60 seconds)
pub fn default_health_staleness_ms() -> u64 {
    60_000
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
