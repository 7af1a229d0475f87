//! Query the capabilities a provider registered

use crate::core::capability::Capability;
use crate::core::registry::ProviderRegistry;
use crate::utils::error::{RegistryError, Result};
use std::sync::Arc;

/// Lists the capabilities of a provider
///
/// Stricter than the registry: an empty id is a validation error here, while
/// unknown providers still yield an empty list.
#[derive(Debug, Clone)]
pub struct GetProviderCapabilities {
    registry: Arc<ProviderRegistry>,
}

impl GetProviderCapabilities {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub fn execute(&self, provider_id: &str) -> Result<Vec<Capability>> {
        let provider_id = provider_id.trim();
        if provider_id.is_empty() {
            return Err(RegistryError::validation("Provider id must not be empty"));
        }

        Ok(self.registry.available_capabilities(provider_id))
    }
}
