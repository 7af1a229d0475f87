//! Resolution cache
//!
//! Caches *which* instance a capability resolved to, not any content. Entries
//! hold weak references only, so the cache never keeps a disposed registration
//! or instance alive.

use crate::core::capability::Capability;
use crate::core::registry::ProviderRegistration;
use crate::core::traits::CapabilityProvider;
use dashmap::DashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::time::Instant;

/// A cached resolution decision
#[derive(Clone)]
pub struct ResolutionCacheEntry {
    pub capability: Capability,
    pub provider_id: String,
    registration: Weak<ProviderRegistration>,
    instance: Weak<dyn CapabilityProvider>,
    resolved_at: Instant,
    ttl: Duration,
}

impl ResolutionCacheEntry {
    pub(crate) fn new(
        capability: Capability,
        registration: &Arc<ProviderRegistration>,
        instance: &Arc<dyn CapabilityProvider>,
        ttl: Duration,
    ) -> Self {
        Self {
            capability,
            provider_id: registration.id().to_string(),
            registration: Arc::downgrade(registration),
            instance: Arc::downgrade(instance),
            resolved_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.resolved_at.elapsed() >= self.ttl
    }

    pub(crate) fn registration(&self) -> Option<Arc<ProviderRegistration>> {
        self.registration.upgrade()
    }

    pub(crate) fn instance(&self) -> Option<Arc<dyn CapabilityProvider>> {
        self.instance.upgrade()
    }
}

/// Capability → resolution decision
#[derive(Default)]
pub struct ResolutionCache {
    entries: DashMap<Capability, ResolutionCacheEntry>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, capability: Capability) -> Option<ResolutionCacheEntry> {
        self.entries.get(&capability).map(|entry| entry.clone())
    }

    pub(crate) fn insert(&self, entry: ResolutionCacheEntry) {
        self.entries.insert(entry.capability, entry);
    }

    pub fn remove(&self, capability: Capability) {
        self.entries.remove(&capability);
    }

    /// Drop every entry pointing at `provider_id`, returning how many were dropped
    pub fn invalidate_provider(&self, provider_id: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.provider_id != provider_id);
        before.saturating_sub(self.entries.len())
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of unexpired entries
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.is_expired()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
