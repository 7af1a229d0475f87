//! Configuration loading from environment variables

use super::models::*;
use crate::utils::error::{RegistryError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

const ENV_PREFIX: &str = "PROVIDER_REGISTRY_";

impl RegistryConfig {
    /// Load configuration from `PROVIDER_REGISTRY_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from environment variables");

        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let mut config = Self::default();

        if let Some(enabled) = var("HEALTH_ENABLED") {
            config.health.enabled = parse_var("HEALTH_ENABLED", &enabled)?;
        }
        if let Some(interval) = var("HEALTH_INTERVAL_MS") {
            config.health.interval_ms = parse_var("HEALTH_INTERVAL_MS", &interval)?;
        }
        if let Some(timeout) = var("CHECK_TIMEOUT_MS") {
            config.health.check_timeout_ms = parse_var("CHECK_TIMEOUT_MS", &timeout)?;
        }
        if let Some(ttl) = var("CACHE_TTL_MS") {
            config.resolver.cache_ttl_ms = parse_var("CACHE_TTL_MS", &ttl)?;
        }
        if let Some(staleness) = var("HEALTH_STALENESS_MS") {
            config.resolver.health_staleness_ms = parse_var("HEALTH_STALENESS_MS", &staleness)?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = var("LOG_JSON") {
            config.logging.json = parse_var("LOG_JSON", &json)?;
        }

        debug!("Configuration loaded from environment variables");
        Ok(config)
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        RegistryError::Config(format!("Invalid {}{}: {}", ENV_PREFIX, name, e))
    })
}
