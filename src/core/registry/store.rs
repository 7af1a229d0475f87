//! Registration store
//!
//! The one piece of shared mutable state that needs synchronized mutation.
//! The lock is never held across an await point; readers get cloned `Arc`s.

use super::registration::ProviderRegistration;
use crate::core::capability::Capability;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub(crate) struct RegistrationStore {
    registrations: RwLock<HashMap<String, Arc<ProviderRegistration>>>,
    next_sequence: AtomicU64,
}

impl RegistrationStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn next_sequence(&self) -> u64 {
        self.next_sequence.fetch_add(1, Ordering::Relaxed)
    }

    /// Insert or replace, returning the replaced registration
    pub(crate) fn insert(
        &self,
        registration: Arc<ProviderRegistration>,
    ) -> Option<Arc<ProviderRegistration>> {
        self.registrations
            .write()
            .insert(registration.id().to_string(), registration)
    }

    pub(crate) fn remove(&self, id: &str) -> Option<Arc<ProviderRegistration>> {
        self.registrations.write().remove(id)
    }

    pub(crate) fn get(&self, id: &str) -> Option<Arc<ProviderRegistration>> {
        self.registrations.read().get(id).cloned()
    }

    /// Whether `registration` is still the one stored under its id
    pub(crate) fn is_current(&self, registration: &Arc<ProviderRegistration>) -> bool {
        self.registrations
            .read()
            .get(registration.id())
            .is_some_and(|current| Arc::ptr_eq(current, registration))
    }

    /// All registrations in registration order
    pub(crate) fn snapshot(&self) -> Vec<Arc<ProviderRegistration>> {
        let mut registrations: Vec<_> = self.registrations.read().values().cloned().collect();
        registrations.sort_by_key(|registration| registration.sequence());
        registrations
    }

    /// Registrations offering `capability`, by priority then registration order
    pub(crate) fn candidates(&self, capability: Capability) -> Vec<Arc<ProviderRegistration>> {
        let mut candidates: Vec<_> = self
            .registrations
            .read()
            .values()
            .filter(|registration| registration.supports(capability))
            .cloned()
            .collect();
        candidates.sort_by_key(|registration| (registration.priority(), registration.sequence()));
        candidates
    }

    /// Remove everything, returning the removed registrations
    pub(crate) fn drain(&self) -> Vec<Arc<ProviderRegistration>> {
        self.registrations
            .write()
            .drain()
            .map(|(_, registration)| registration)
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.registrations.read().len()
    }
}
