//! Capability factories
//!
//! A provider registers one factory per capability it serves. Factories are
//! invoked lazily, the first time a capability is resolved to that provider.

use crate::config::ProviderConfig;
use crate::core::capability::Capability;
use crate::core::providers::ProviderError;
use crate::core::traits::CapabilityProvider;
use crate::utils::error::{RegistryError, Result};
use std::fmt;
use std::sync::Arc;

/// Constructor for a capability instance
pub type CapabilityFactory = Arc<
    dyn Fn(&ProviderConfig) -> std::result::Result<Arc<dyn CapabilityProvider>, ProviderError>
        + Send
        + Sync,
>;

/// Wrap a closure as a [`CapabilityFactory`]
pub fn factory<F>(f: F) -> CapabilityFactory
where
    F: Fn(&ProviderConfig) -> std::result::Result<Arc<dyn CapabilityProvider>, ProviderError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// Ordered capability → factory table
///
/// Iteration follows insertion order. Adding a capability twice replaces the
/// factory but keeps the original position.
#[derive(Clone, Default)]
pub struct CapabilityFactories {
    entries: Vec<(Capability, CapabilityFactory)>,
}

impl CapabilityFactories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factory (builder pattern)
    pub fn with(mut self, capability: Capability, factory: CapabilityFactory) -> Self {
        self.insert(capability, factory);
        self
    }

    /// Add or replace a factory
    pub fn insert(&mut self, capability: Capability, factory: CapabilityFactory) {
        match self.entries.iter_mut().find(|(c, _)| *c == capability) {
            Some(entry) => entry.1 = factory,
            None => self.entries.push((capability, factory)),
        }
    }

    /// Build from string keys, rejecting any key that is not a capability
    ///
    /// All offending keys are reported together.
    pub fn from_named<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, CapabilityFactory)>,
        K: AsRef<str>,
    {
        let mut factories = Self::new();
        let mut unknown = Vec::new();

        for (key, factory) in entries {
            let key = key.as_ref();
            match key.parse::<Capability>() {
                Ok(capability) => factories.insert(capability, factory),
                Err(_) => unknown.push(format!("'{}'", key)),
            }
        }

        if !unknown.is_empty() {
            return Err(RegistryError::validation(format!(
                "Unknown capability key(s): {}",
                unknown.join(", ")
            )));
        }

        Ok(factories)
    }

    pub fn get(&self, capability: Capability) -> Option<&CapabilityFactory> {
        self.entries
            .iter()
            .find(|(c, _)| *c == capability)
            .map(|(_, f)| f)
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.get(capability).is_some()
    }

    /// Capabilities in insertion order
    pub fn capabilities(&self) -> Vec<Capability> {
        self.entries.iter().map(|(c, _)| *c).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for CapabilityFactories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityFactories")
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

impl FromIterator<(Capability, CapabilityFactory)> for CapabilityFactories {
    fn from_iter<T: IntoIterator<Item = (Capability, CapabilityFactory)>>(iter: T) -> Self {
        let mut factories = Self::new();
        for (capability, factory) in iter {
            factories.insert(capability, factory);
        }
        factories
    }
}
