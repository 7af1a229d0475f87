//! Configuration management for the registry
//!
//! This module handles loading, validation, and management of registry configuration.

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{RegistryError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Registry configuration
    pub registry: RegistryConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RegistryError::Config(format!("Failed to read config file: {}", e)))?;

        let registry: RegistryConfig = serde_yaml::from_str(&content)
            .map_err(|e| RegistryError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { registry };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let registry = RegistryConfig::from_env()?;
        let config = Self { registry };

        config.validate()?;
        Ok(config)
    }

    /// Get health monitor configuration
    pub fn health(&self) -> &HealthMonitorConfig {
        &self.registry.health
    }

    /// Get resolver configuration
    pub fn resolver(&self) -> &ResolverConfig {
        &self.registry.resolver
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.registry.logging
    }

    /// Get statically configured providers
    pub fn providers(&self) -> &[ProviderConfig] {
        &self.registry.providers
    }

    /// Find a configured provider by id (trimmed)
    pub fn provider(&self, id: &str) -> Option<&ProviderConfig> {
        let id = id.trim();
        self.registry.providers.iter().find(|p| p.id.trim() == id)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.registry
            .validate()
            .map_err(|e| RegistryError::Config(format!("Registry config error: {}", e)))
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.registry = self.registry.merge(other.registry);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.registry)
            .map_err(|e| RegistryError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.registry)
            .map_err(|e| RegistryError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
