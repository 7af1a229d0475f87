//! Per-provider registration record
//!
//! A registration owns its configuration, its capability factories, the lazily
//! created instances and the provider's health. Instances live in a small
//! arena indexed by capability ordinal and are never shared with another
//! registration.

use crate::config::ProviderConfig;
use crate::core::capability::Capability;
use crate::core::health::{HealthCheckResult, ProviderHealth};
use crate::core::providers::{CapabilityFactories, ProviderError};
use crate::core::traits::CapabilityProvider;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::debug;

type InstanceSlot = Option<Arc<dyn CapabilityProvider>>;

#[derive(Default)]
struct InstanceArena {
    slots: [InstanceSlot; Capability::COUNT],
    disposed: bool,
}

/// Registration record for one provider
pub struct ProviderRegistration {
    config: ProviderConfig,
    factories: CapabilityFactories,
    sequence: u64,
    enabled: AtomicBool,
    instances: Mutex<InstanceArena>,
    health: RwLock<ProviderHealth>,
}

impl ProviderRegistration {
    pub(crate) fn new(config: ProviderConfig, factories: CapabilityFactories, sequence: u64) -> Self {
        Self {
            enabled: AtomicBool::new(config.enabled),
            config,
            factories,
            sequence,
            instances: Mutex::new(InstanceArena::default()),
            health: RwLock::new(ProviderHealth::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    /// Configuration snapshot reflecting the current enabled flag
    pub fn config(&self) -> ProviderConfig {
        let mut config = self.config.clone();
        config.enabled = self.is_enabled();
        config
    }

    pub fn priority(&self) -> i32 {
        self.config.priority
    }

    /// Registration order, used to break priority ties
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Returns the previous value
    pub(crate) fn set_enabled(&self, enabled: bool) -> bool {
        self.enabled.swap(enabled, Ordering::AcqRel)
    }

    /// Registered capabilities in registration order
    pub fn capabilities(&self) -> Vec<Capability> {
        self.factories.capabilities()
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.factories.contains(capability)
    }

    /// Live instance for a capability, if one has been created
    pub fn instance(&self, capability: Capability) -> Option<Arc<dyn CapabilityProvider>> {
        self.instances.lock().slots[capability.ordinal()].clone()
    }

    /// Return the live instance, creating it through the factory on first use
    ///
    /// The factory runs under the arena lock, so concurrent resolutions never
    /// construct the same capability twice and never race disposal.
    pub(crate) fn get_or_create(
        &self,
        capability: Capability,
    ) -> Result<Arc<dyn CapabilityProvider>, ProviderError> {
        let mut arena = self.instances.lock();

        if arena.disposed {
            return Err(ProviderError::unavailable(self.id(), "registration disposed"));
        }

        if let Some(instance) = &arena.slots[capability.ordinal()] {
            return Ok(instance.clone());
        }

        let factory = self.factories.get(capability).ok_or_else(|| {
            ProviderError::construction(self.id(), capability.as_str(), "capability not registered")
        })?;

        debug!("Instantiating {} for provider {}", capability, self.id());
        let instance = (**factory)(&self.config)?;
        arena.slots[capability.ordinal()] = Some(instance.clone());

        Ok(instance)
    }

    /// All materialized instances, in ordinal order
    pub fn live_instances(&self) -> Vec<(Capability, Arc<dyn CapabilityProvider>)> {
        let arena = self.instances.lock();
        Capability::ALL
            .into_iter()
            .filter_map(|capability| {
                arena.slots[capability.ordinal()]
                    .clone()
                    .map(|instance| (capability, instance))
            })
            .collect()
    }

    pub fn has_live_instances(&self) -> bool {
        self.instances.lock().slots.iter().any(Option::is_some)
    }

    pub fn live_instance_count(&self) -> usize {
        self.instances.lock().slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Drop every live instance, calling its dispose hook
    ///
    /// After disposal nothing can be instantiated and health updates are
    /// ignored. Returns the number of instances disposed.
    pub(crate) fn dispose(&self) -> usize {
        let instances: Vec<_> = {
            let mut arena = self.instances.lock();
            arena.disposed = true;
            arena.slots.iter_mut().filter_map(Option::take).collect()
        };

        for instance in &instances {
            instance.dispose();
        }

        if !instances.is_empty() {
            debug!("Disposed {} instance(s) of {}", instances.len(), self.id());
        }
        instances.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.instances.lock().disposed
    }

    pub fn health(&self) -> ProviderHealth {
        self.health.read().clone()
    }

    pub fn is_healthy(&self) -> bool {
        self.health.read().healthy
    }

    /// Whether the recorded health is recent enough to skip a check
    pub fn health_is_fresh(&self, staleness: Duration) -> bool {
        self.health.read().is_fresh(staleness)
    }

    /// Record a health check outcome
    ///
    /// Returns `true` when the provider flipped from healthy to unhealthy.
    pub(crate) fn record_health(&self, result: &HealthCheckResult) -> bool {
        if self.is_disposed() {
            return false;
        }

        let mut health = self.health.write();
        let was_healthy = health.healthy;
        health.update(result);
        was_healthy && !health.healthy
    }
}

impl fmt::Debug for ProviderRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistration")
            .field("id", &self.id())
            .field("priority", &self.priority())
            .field("sequence", &self.sequence)
            .field("enabled", &self.is_enabled())
            .field("capabilities", &self.capabilities())
            .field("live_instances", &self.live_instance_count())
            .field("healthy", &self.is_healthy())
            .finish()
    }
}
