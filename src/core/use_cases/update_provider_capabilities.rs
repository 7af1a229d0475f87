//! Persist a user's capability toggles for a provider

use super::preferences::{CapabilitySetting, CapabilitySettings, PreferencesStore};
use crate::core::capability::Capability;
use crate::utils::error::{RegistryError, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Validates and stores capability settings
///
/// The registry is never mutated; it reflects what a provider can serve, not
/// what the user turned on.
#[derive(Clone)]
pub struct UpdateProviderCapabilities {
    preferences: Arc<dyn PreferencesStore>,
}

impl UpdateProviderCapabilities {
    pub fn new(preferences: Arc<dyn PreferencesStore>) -> Self {
        Self { preferences }
    }

    /// `settings` must look like `{"CATALOG": {"enabled": true}, ...}`
    pub async fn execute(&self, provider_id: &str, settings: &Value) -> Result<()> {
        let provider_id = provider_id.trim();
        if provider_id.is_empty() {
            return Err(RegistryError::validation("Provider id must not be empty"));
        }

        let settings = parse_settings(settings)?;
        info!(
            "Saving {} capability setting(s) for provider {}",
            settings.len(),
            provider_id
        );
        self.preferences
            .save_capability_settings(provider_id, settings)
            .await
    }
}

fn parse_settings(settings: &Value) -> Result<CapabilitySettings> {
    let object = settings
        .as_object()
        .ok_or_else(|| RegistryError::validation("Capability settings must be an object"))?;

    let mut parsed = CapabilitySettings::new();
    for (key, value) in object {
        let capability: Capability = key.parse()?;
        let enabled = value
            .get("enabled")
            .and_then(Value::as_bool)
            .ok_or_else(|| {
                RegistryError::validation(format!(
                    "Setting for capability '{}' must carry a boolean 'enabled' flag",
                    key
                ))
            })?;
        parsed.insert(capability, CapabilitySetting { enabled });
    }

    Ok(parsed)
}
