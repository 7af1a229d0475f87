//! Provider-facing types
//!
//! Provider modules hand the registry a [`CapabilityFactories`] table; the
//! registry turns factories into live [`CapabilityProvider`](crate::core::traits::CapabilityProvider)
//! instances on demand.

pub mod error;
pub mod factory;

pub use error::ProviderError;
pub use factory::{CapabilityFactories, CapabilityFactory, factory};
