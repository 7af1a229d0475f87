//! # Provider Capabilities
//!
//! A registry of content-metadata providers (TMDB, Trakt, TVDB, ...) and the
//! capabilities each one can serve.
//!
//! ## Features
//!
//! - **Capability registration**: providers register one factory per capability
//! - **Lazy instantiation**: an instance is built the first time it is resolved
//! - **Health tracking**: a background monitor probes live instances on a timer
//! - **Priority resolution**: the lowest priority value among healthy providers wins
//! - **Resolution cache**: recent decisions are reused until they expire or go stale
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use provider_capabilities::{
//!     Capability, CapabilityFactories, CapabilityProvider, Config, ProviderRegistry, factory,
//!     init_logging,
//! };
//! use std::any::Any;
//! use std::sync::Arc;
//!
//! struct TraktCatalog;
//!
//! impl CapabilityProvider for TraktCatalog {
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/registry.yaml").await?;
//!     init_logging(config.logging())?;
//!
//!     let registry = ProviderRegistry::new(config.registry)?;
//!     registry.register_configured(
//!         "trakt",
//!         CapabilityFactories::new().with(
//!             Capability::Catalog,
//!             factory(|_| Ok(Arc::new(TraktCatalog) as Arc<dyn CapabilityProvider>)),
//!         ),
//!     )?;
//!
//!     if let Some(binding) = registry.resolve_capability(Capability::Catalog).await {
//!         println!("Catalog served by {}", binding.provider_id);
//!     }
//!
//!     registry.shutdown().await;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::{
    Config, HealthMonitorConfig, LoggingConfig, ProviderConfig, RegistryConfig, ResolverConfig,
    Validate,
};
pub use core::capability::Capability;
pub use core::health::{HealthCheckResult, HealthMonitor, ProviderHealth, SweepSummary};
pub use core::providers::{CapabilityFactories, CapabilityFactory, ProviderError, factory};
pub use core::registry::{
    ProviderCapabilityEntry, ProviderRegistration, ProviderRegistry, RegistryStatistics,
};
pub use core::resolver::CapabilityBinding;
pub use core::traits::CapabilityProvider;
pub use core::use_cases::{
    CapabilitySetting, CapabilitySettings, GetProviderCapabilities, InMemoryPreferencesStore,
    PreferencesStore, UpdateProviderCapabilities,
};
pub use utils::error::{RegistryError, Result};
pub use utils::logging::init_logging;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
