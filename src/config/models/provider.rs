//! Provider configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Static configuration passed when a provider registers
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Unique provider identifier (registration key)
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Provider type (tmdb, trakt, mdblist, ...)
    #[serde(default)]
    pub provider_type: String,
    /// Whether the provider takes part in resolution
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Resolution priority, lower values win
    #[serde(default)]
    pub priority: i32,
    /// API key or access token
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Provider-specific settings
    #[serde(default)]
    pub settings: HashMap<String, serde_json::Value>,
}

impl ProviderConfig {
    /// Create an enabled configuration with default priority
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            ..Default::default()
        }
    }

    /// Set the resolution priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the enabled flag
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the provider type
    pub fn with_type(mut self, provider_type: impl Into<String>) -> Self {
        self.provider_type = provider_type.into();
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            provider_type: String::new(),
            enabled: true,
            priority: 0,
            api_key: None,
            base_url: None,
            settings: HashMap::new(),
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("provider_type", &self.provider_type)
            .field("enabled", &self.enabled)
            .field("priority", &self.priority)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("settings", &self.settings.keys().collect::<Vec<_>>())
            .finish()
    }
}
