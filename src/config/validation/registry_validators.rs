//! Registry configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::debug;

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating registry configuration");

        self.health.validate()?;
        self.resolver.validate()?;
        self.logging.validate()?;

        // Check for duplicate provider ids
        let mut provider_ids = HashSet::new();
        for provider in &self.providers {
            provider.validate()?;
            if !provider_ids.insert(provider.id.trim()) {
                return Err(format!("Duplicate provider id: {}", provider.id.trim()));
            }
        }

        Ok(())
    }
}

impl Validate for HealthMonitorConfig {
    fn validate(&self) -> Result<(), String> {
        if self.interval_ms == 0 {
            return Err("Health check interval must be greater than 0".to_string());
        }

        if self.check_timeout_ms == 0 {
            return Err("Health check timeout must be greater than 0".to_string());
        }

        if self.enabled && self.check_timeout_ms > self.interval_ms {
            return Err("Health check timeout should not exceed the check interval".to_string());
        }

        Ok(())
    }
}

impl Validate for ResolverConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cache_ttl_ms == 0 {
            return Err("Resolution cache TTL must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Provider id cannot be empty".to_string());
        }

        if let Some(base_url) = &self.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(format!(
                    "Provider {} base URL must start with http:// or https://",
                    self.id.trim()
                ));
            }
        }

        Ok(())
    }
}
