//! Statistics and introspection
//!
//! Pure reads over a snapshot of the registration map.

use super::registration::ProviderRegistration;
use super::registry::ProviderRegistry;
use crate::core::capability::Capability;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Point-in-time registry statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStatistics {
    /// Number of registrations
    pub total_providers: usize,
    /// Registrations with the enabled flag set
    pub enabled_providers: usize,
    /// Registrations currently healthy
    pub healthy_providers: usize,
    /// Registrations both enabled and healthy
    pub active_providers: usize,
    /// Materialized capability instances across all registrations
    pub live_instances: usize,
    /// Unexpired resolution cache entries
    pub cached_resolutions: usize,
    /// Registrations with a factory per capability, regardless of health or enabled state
    pub registrations_by_capability: BTreeMap<Capability, usize>,
}

impl RegistryStatistics {
    pub(crate) fn compute(registrations: &[Arc<ProviderRegistration>], cached_resolutions: usize) -> Self {
        let mut registrations_by_capability: BTreeMap<Capability, usize> =
            Capability::ALL.into_iter().map(|capability| (capability, 0)).collect();
        let mut stats = Self {
            total_providers: registrations.len(),
            enabled_providers: 0,
            healthy_providers: 0,
            active_providers: 0,
            live_instances: 0,
            cached_resolutions,
            registrations_by_capability: BTreeMap::new(),
        };

        for registration in registrations {
            let enabled = registration.is_enabled();
            let healthy = registration.is_healthy();

            stats.enabled_providers += usize::from(enabled);
            stats.healthy_providers += usize::from(healthy);
            stats.active_providers += usize::from(enabled && healthy);
            stats.live_instances += registration.live_instance_count();

            for capability in registration.capabilities() {
                *registrations_by_capability.entry(capability).or_default() += 1;
            }
        }

        stats.registrations_by_capability = registrations_by_capability;
        stats
    }

    /// Potential providers for a capability
    pub fn registrations_for(&self, capability: Capability) -> usize {
        self.registrations_by_capability
            .get(&capability)
            .copied()
            .unwrap_or_default()
    }
}

/// One row of [`ProviderRegistry::providers_for_capability`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderCapabilityEntry {
    pub provider_id: String,
    pub healthy: bool,
    pub enabled: bool,
    pub priority: i32,
}

impl ProviderRegistry {
    /// Compute a statistics snapshot
    pub fn statistics(&self) -> RegistryStatistics {
        RegistryStatistics::compute(
            &self.state.store.snapshot(),
            self.state.resolver.cache().len(),
        )
    }

    /// Every registration offering `capability`, enabled or not
    ///
    /// Ordered by priority ascending, ties in registration order.
    pub fn providers_for_capability(&self, capability: Capability) -> Vec<ProviderCapabilityEntry> {
        self.state
            .store
            .candidates(capability)
            .iter()
            .map(|registration| ProviderCapabilityEntry {
                provider_id: registration.id().to_string(),
                healthy: registration.is_healthy(),
                enabled: registration.is_enabled(),
                priority: registration.priority(),
            })
            .collect()
    }

    /// Provider ids in registration order
    pub fn list_providers(&self) -> Vec<String> {
        self.state
            .store
            .snapshot()
            .iter()
            .map(|registration| registration.id().to_string())
            .collect()
    }
}
