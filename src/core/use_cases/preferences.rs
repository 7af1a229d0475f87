//! User preferences store
//!
//! Persistence of per-provider capability toggles lives outside the registry;
//! the registry only knows what a provider *can* serve.

use crate::core::capability::Capability;
use crate::utils::error::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// User setting for one capability of one provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySetting {
    pub enabled: bool,
}

/// Capability settings of one provider
pub type CapabilitySettings = BTreeMap<Capability, CapabilitySetting>;

/// Storage for user capability preferences
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferencesStore: Send + Sync {
    /// Replace the stored settings for a provider
    async fn save_capability_settings(
        &self,
        provider_id: &str,
        settings: CapabilitySettings,
    ) -> Result<()>;

    /// Stored settings for a provider, empty if none
    async fn capability_settings(&self, provider_id: &str) -> Result<CapabilitySettings>;
}

/// Process-local preferences store
#[derive(Debug, Default)]
pub struct InMemoryPreferencesStore {
    settings: RwLock<HashMap<String, CapabilitySettings>>,
}

impl InMemoryPreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferencesStore for InMemoryPreferencesStore {
    async fn save_capability_settings(
        &self,
        provider_id: &str,
        settings: CapabilitySettings,
    ) -> Result<()> {
        self.settings.write().insert(provider_id.to_string(), settings);
        Ok(())
    }

    async fn capability_settings(&self, provider_id: &str) -> Result<CapabilitySettings> {
        Ok(self
            .settings
            .read()
            .get(provider_id)
            .cloned()
            .unwrap_or_default())
    }
}
