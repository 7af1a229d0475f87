//! Capability resolution
//!
//! Turns a capability request into a healthy provider instance, reusing
//! recent decisions and avoiding redundant instantiation and health checks.

use super::cache::{ResolutionCache, ResolutionCacheEntry};
use crate::config::ResolverConfig;
use crate::core::capability::Capability;
use crate::core::health::checker::check_registration;
use crate::core::registry::RegistryState;
use crate::core::traits::CapabilityProvider;
use std::fmt;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, warn};

/// A resolved capability
#[derive(Clone)]
pub struct CapabilityBinding {
    /// Provider the capability resolved to
    pub provider_id: String,
    /// Capability that was requested
    pub capability: Capability,
    /// Live instance owned by the provider's registration
    pub instance: Arc<dyn CapabilityProvider>,
    /// Wall-clock time spent consulting health, 0 for cache hits
    pub response_time_ms: u64,
    /// Whether the decision came from the resolution cache
    pub from_cache: bool,
}

impl fmt::Debug for CapabilityBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityBinding")
            .field("provider_id", &self.provider_id)
            .field("capability", &self.capability)
            .field("response_time_ms", &self.response_time_ms)
            .field("from_cache", &self.from_cache)
            .finish()
    }
}

/// Selects the best eligible provider instance for a capability
pub struct CapabilityResolver {
    config: ResolverConfig,
    cache: ResolutionCache,
}

impl CapabilityResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            cache: ResolutionCache::new(),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    pub fn invalidate_provider(&self, provider_id: &str) -> usize {
        let dropped = self.cache.invalidate_provider(provider_id);
        if dropped > 0 {
            debug!("Dropped {} cached resolution(s) for {}", dropped, provider_id);
        }
        dropped
    }

    /// Resolve a capability
    ///
    /// # Flow
    ///
    /// 1. Serve a cached decision if it is unexpired and still valid
    /// 2. Order enabled candidates by priority, then registration order
    /// 3. Lazily instantiate each candidate and consult its health, re-checking
    ///    every live instance of the provider when the recorded health is stale
    /// 4. Cache and return the first healthy candidate
    ///
    /// Returns `None` when no enabled, healthy provider offers the capability.
    pub(crate) async fn resolve(
        &self,
        state: &RegistryState,
        capability: Capability,
    ) -> Option<CapabilityBinding> {
        if state.is_closed() {
            return None;
        }

        if let Some(binding) = self.cached(state, capability) {
            debug!("Resolved {} to {} from cache", capability, binding.provider_id);
            return Some(binding);
        }

        let candidates = state.store.candidates(capability);
        for registration in candidates.iter().filter(|r| r.is_enabled()) {
            let instance = match registration.get_or_create(capability) {
                Ok(instance) => instance,
                Err(error) => {
                    warn!(
                        "Skipping {} for {}: {}",
                        registration.id(),
                        capability,
                        error
                    );
                    continue;
                }
            };

            let start_time = Instant::now();
            // Provider health covers every live instance, not just this one
            let healthy = if registration.health_is_fresh(self.config.health_staleness()) {
                registration.is_healthy()
            } else {
                match check_registration(registration, state.check_timeout()).await {
                    Some(result) => {
                        state.record_health(registration, &result);
                        result.healthy
                    }
                    // Disposed while resolving
                    None => false,
                }
            };
            let response_time_ms = start_time.elapsed().as_millis() as u64;

            if !healthy {
                debug!("Skipping unhealthy provider {} for {}", registration.id(), capability);
                continue;
            }

            // Shutdown or re-registration raced this resolution
            if state.is_closed() || !state.store.is_current(registration) {
                continue;
            }

            self.cache.insert(ResolutionCacheEntry::new(
                capability,
                registration,
                &instance,
                self.config.cache_ttl(),
            ));

            debug!(
                "Resolved {} to {} in {}ms",
                capability,
                registration.id(),
                response_time_ms
            );
            return Some(CapabilityBinding {
                provider_id: registration.id().to_string(),
                capability,
                instance,
                response_time_ms,
                from_cache: false,
            });
        }

        debug!("No healthy provider available for {}", capability);
        None
    }

    /// Serve a cache entry after re-validating it against live state
    ///
    /// Any failed check drops the entry so the caller recomputes.
    fn cached(&self, state: &RegistryState, capability: Capability) -> Option<CapabilityBinding> {
        let entry = self.cache.get(capability)?;

        let binding = (!entry.is_expired())
            .then(|| entry.registration())
            .flatten()
            .filter(|registration| {
                state.store.is_current(registration)
                    && registration.is_enabled()
                    && registration.is_healthy()
            })
            .and_then(|_| entry.instance())
            .map(|instance| CapabilityBinding {
                provider_id: entry.provider_id.clone(),
                capability,
                instance,
                response_time_ms: 0,
                from_cache: true,
            });

        if binding.is_none() {
            self.cache.remove(capability);
        }
        binding
    }
}
