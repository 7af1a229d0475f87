//! Capability provider trait definition
//!
//! Defines the interface the registry needs from a live capability instance.

use crate::core::providers::ProviderError;
use async_trait::async_trait;
use std::any::Any;

/// A live capability instance produced by a provider factory
///
/// The registry only manages lifecycle and health; the capability methods
/// themselves (catalog listing, search, ...) live on the concrete type, which
/// callers reach through [`CapabilityProvider::as_any`].
///
/// # Design Principles
///
/// 1. **Health first**: `health_check` must be cheap, the registry calls it on
///    every monitor sweep and on stale resolutions
/// 2. **Bounded**: the registry wraps every check in a timeout, implementations
///    do not need their own
/// 3. **Explicit disposal**: `dispose` is called exactly once when the owning
///    registration is unregistered, replaced or the registry shuts down
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use provider_capabilities::{CapabilityProvider, ProviderError};
/// use std::any::Any;
///
/// struct TmdbCatalog;
///
/// #[async_trait]
/// impl CapabilityProvider for TmdbCatalog {
///     async fn health_check(&self) -> Result<(), ProviderError> {
///         Ok(())
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
/// ```
#[async_trait]
pub trait CapabilityProvider: Send + Sync + 'static {
    /// Probe the backing service
    ///
    /// `Ok(())` means healthy. Errors, timeouts and panics are all recorded as
    /// unhealthy by the registry and never propagate further.
    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    /// Release resources held by this instance
    fn dispose(&self) {}

    /// Access the concrete type for downcasting
    fn as_any(&self) -> &dyn Any;
}

impl dyn CapabilityProvider {
    /// Downcast to a concrete capability type
    pub fn downcast_ref<T: CapabilityProvider>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
