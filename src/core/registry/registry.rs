//! Provider registry façade
//!
//! The registry is the single entry point consumers use: providers register
//! capability factories under a unique id, consumers query which providers
//! offer what and resolve a capability to a healthy instance.
//!
//! # Example
//!
//! ```rust
//! use provider_capabilities::{
//!     Capability, CapabilityFactories, CapabilityProvider, ProviderConfig, ProviderRegistry,
//!     RegistryConfig, factory,
//! };
//! use std::any::Any;
//! use std::sync::Arc;
//!
//! struct TmdbMetadata;
//!
//! impl CapabilityProvider for TmdbMetadata {
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> provider_capabilities::Result<()> {
//! let registry = ProviderRegistry::new(RegistryConfig::without_monitoring())?;
//! registry.register(
//!     "tmdb",
//!     CapabilityFactories::new().with(
//!         Capability::Metadata,
//!         factory(|_| Ok(Arc::new(TmdbMetadata) as Arc<dyn CapabilityProvider>)),
//!     ),
//!     ProviderConfig::new("tmdb").with_priority(1),
//! )?;
//!
//! let binding = registry.resolve_capability(Capability::Metadata).await;
//! assert_eq!(binding.map(|b| b.provider_id).as_deref(), Some("tmdb"));
//!
//! registry.shutdown().await;
//! # Ok(())
//! # }
//! ```

use super::registration::ProviderRegistration;
use super::state::RegistryState;
use crate::config::{ProviderConfig, RegistryConfig, Validate};
use crate::core::capability::Capability;
use crate::core::health::monitor::run_sweep;
use crate::core::health::{HealthMonitor, ProviderHealth, SweepSummary};
use crate::core::providers::{CapabilityFactories, CapabilityFactory};
use crate::core::resolver::{CapabilityBinding, CapabilityResolver};
use crate::utils::error::{RegistryError, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Provider capability registry
pub struct ProviderRegistry {
    pub(crate) state: Arc<RegistryState>,
    pub(crate) monitor: HealthMonitor,
    configured: Vec<ProviderConfig>,
}

impl ProviderRegistry {
    /// Create a registry and start background health monitoring if enabled
    ///
    /// The configuration is validated first; an invalid one is a
    /// [`RegistryError::Config`]. The monitor is spawned on the current tokio
    /// runtime; without one the registry still works and checks health on
    /// resolution only.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| RegistryError::config(format!("Registry config error: {}", e)))?;

        let resolver = CapabilityResolver::new(config.resolver.clone());
        let state = Arc::new(RegistryState::new(resolver, config.health.check_timeout()));
        let monitor = HealthMonitor::new(config.health.clone());
        monitor.start(Arc::downgrade(&state));

        Ok(Self {
            state,
            monitor,
            configured: config.providers,
        })
    }

    // ========== Registration ==========

    /// Register a provider, replacing any previous registration with the same id
    ///
    /// The id is trimmed and must not be empty; the trimmed id is also written
    /// to `config.id`. Cached resolutions and live instances of a replaced
    /// registration are dropped before this returns.
    pub fn register(
        &self,
        provider_id: &str,
        factories: CapabilityFactories,
        mut config: ProviderConfig,
    ) -> Result<()> {
        let provider_id = provider_id.trim();
        if provider_id.is_empty() {
            return Err(RegistryError::validation("Provider id must not be empty"));
        }
        if self.state.is_closed() {
            return Err(RegistryError::Closed);
        }

        config.id = provider_id.to_string();
        if config.name.is_empty() {
            config.name = config.id.clone();
        }

        let capabilities = factories.capabilities();
        let registration = Arc::new(ProviderRegistration::new(
            config,
            factories,
            self.state.store.next_sequence(),
        ));

        let replaced = self.state.store.insert(registration);
        self.state.resolver.invalidate_provider(provider_id);

        // Shutdown raced this call and may already have drained the store
        if self.state.is_closed() {
            for registration in self.state.store.drain() {
                registration.dispose();
            }
            if let Some(previous) = replaced {
                previous.dispose();
            }
            return Err(RegistryError::Closed);
        }

        match replaced {
            Some(previous) => {
                previous.dispose();
                info!(
                    "Re-registered provider {} with capabilities {:?}",
                    provider_id, capabilities
                );
            }
            None => info!(
                "Registered provider {} with capabilities {:?}",
                provider_id, capabilities
            ),
        }

        Ok(())
    }

    /// Register with string capability keys
    ///
    /// Every key must name a capability; on error nothing is registered.
    pub fn register_named<I, K>(&self, provider_id: &str, factories: I, config: ProviderConfig) -> Result<()>
    where
        I: IntoIterator<Item = (K, CapabilityFactory)>,
        K: AsRef<str>,
    {
        let factories = CapabilityFactories::from_named(factories)?;
        self.register(provider_id, factories, config)
    }

    /// Register using the provider configuration loaded with the registry config
    pub fn register_configured(&self, provider_id: &str, factories: CapabilityFactories) -> Result<()> {
        let id = provider_id.trim();
        let config = self
            .configured
            .iter()
            .find(|config| config.id.trim() == id)
            .cloned()
            .ok_or_else(|| RegistryError::config(format!("No configuration for provider '{}'", id)))?;

        self.register(id, factories, config)
    }

    /// Remove a provider, disposing its live instances
    ///
    /// Returns whether a registration existed.
    pub fn unregister(&self, provider_id: &str) -> bool {
        let provider_id = provider_id.trim();
        let Some(registration) = self.state.store.remove(provider_id) else {
            return false;
        };

        self.state.resolver.invalidate_provider(provider_id);
        registration.dispose();
        info!("Unregistered provider {}", provider_id);
        true
    }

    /// Enable or disable a provider at runtime
    ///
    /// Disabling drops cached resolutions for the provider. Returns whether the
    /// provider exists.
    pub fn set_provider_enabled(&self, provider_id: &str, enabled: bool) -> bool {
        let provider_id = provider_id.trim();
        let Some(registration) = self.state.store.get(provider_id) else {
            return false;
        };

        let was_enabled = registration.set_enabled(enabled);
        if was_enabled && !enabled {
            self.state.resolver.invalidate_provider(provider_id);
        }
        if was_enabled != enabled {
            info!(
                "Provider {} {}",
                provider_id,
                if enabled { "enabled" } else { "disabled" }
            );
        }
        true
    }

    // ========== Query Methods ==========

    /// Configuration of a provider, `None` if unknown
    pub fn provider_config(&self, provider_id: &str) -> Option<ProviderConfig> {
        self.state
            .store
            .get(provider_id.trim())
            .map(|registration| registration.config())
    }

    /// Capabilities registered for a provider, in registration order
    ///
    /// Unknown, empty or whitespace-only ids yield an empty list.
    pub fn available_capabilities(&self, provider_id: &str) -> Vec<Capability> {
        let provider_id = provider_id.trim();
        if provider_id.is_empty() {
            return Vec::new();
        }

        self.state
            .store
            .get(provider_id)
            .map(|registration| registration.capabilities())
            .unwrap_or_default()
    }

    /// Recorded health of a provider
    pub fn provider_health(&self, provider_id: &str) -> Option<ProviderHealth> {
        self.state
            .store
            .get(provider_id.trim())
            .map(|registration| registration.health())
    }

    // ========== Resolution ==========

    /// Resolve a capability to a healthy provider instance
    ///
    /// `None` is an expected outcome (no enabled, healthy provider), not an
    /// error; callers should degrade the feature.
    pub async fn resolve_capability(&self, capability: Capability) -> Option<CapabilityBinding> {
        self.state.resolver.resolve(&self.state, capability).await
    }

    /// Run one health sweep now, independent of the background monitor
    pub async fn refresh_health(&self) -> SweepSummary {
        if self.state.is_closed() {
            return SweepSummary::default();
        }

        let summary = run_sweep(&self.state).await;
        debug!(
            "Manual health sweep: {} checked, {} unhealthy",
            summary.checked, summary.unhealthy
        );
        summary
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("provider_count", &self.state.store.len())
            .field("providers", &self.list_providers())
            .field("monitoring", &self.is_monitoring())
            .field("shut_down", &self.is_shut_down())
            .finish()
    }
}
