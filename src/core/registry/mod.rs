//! Provider registry
//!
//! # Module Structure
//!
//! - `registry` - The façade: registration, queries, resolution
//! - `registration` - Per-provider record with its instance arena and health
//! - `store` - Synchronized registration map
//! - `state` - State shared with the health monitor
//! - `statistics` - Read-only statistics and introspection
//! - `lifecycle` - Shutdown and teardown
//! - `tests` - Test suite for the registry

mod lifecycle;
pub mod registration;
pub mod registry;
pub(crate) mod state;
pub mod statistics;
pub(crate) mod store;

pub use registration::ProviderRegistration;
pub use registry::ProviderRegistry;
pub(crate) use state::RegistryState;
pub use statistics::{ProviderCapabilityEntry, RegistryStatistics};
