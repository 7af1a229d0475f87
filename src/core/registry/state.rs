//! Shared registry state
//!
//! Owned by the façade through an `Arc` and observed weakly by the health
//! monitor task.

use super::registration::ProviderRegistration;
use super::store::RegistrationStore;
use crate::core::health::HealthCheckResult;
use crate::core::resolver::CapabilityResolver;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::warn;

pub(crate) struct RegistryState {
    pub(crate) store: RegistrationStore,
    pub(crate) resolver: CapabilityResolver,
    check_timeout: Duration,
    closed: AtomicBool,
}

impl RegistryState {
    pub(crate) fn new(resolver: CapabilityResolver, check_timeout: Duration) -> Self {
        Self {
            store: RegistrationStore::new(),
            resolver,
            check_timeout,
            closed: AtomicBool::new(false),
        }
    }

    pub(crate) fn check_timeout(&self) -> Duration {
        self.check_timeout
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Mark closed, returning whether it was already closed
    pub(crate) fn close(&self) -> bool {
        self.closed.swap(true, Ordering::AcqRel)
    }

    /// Record a health outcome for a registration
    ///
    /// Outcomes for a closed registry or a replaced registration are dropped.
    /// A flip to unhealthy invalidates cached resolutions for the provider.
    pub(crate) fn record_health(
        &self,
        registration: &Arc<ProviderRegistration>,
        result: &HealthCheckResult,
    ) {
        if self.is_closed() || !self.store.is_current(registration) {
            return;
        }

        if registration.record_health(result) {
            warn!(
                "Provider {} became unhealthy: {}",
                registration.id(),
                result.error.as_deref().unwrap_or("unknown error")
            );
            self.resolver.invalidate_provider(registration.id());
        }
    }
}
