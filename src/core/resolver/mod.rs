//! Capability resolution and the resolution cache

pub mod cache;
pub mod resolver;

pub use cache::{ResolutionCache, ResolutionCacheEntry};
pub use resolver::{CapabilityBinding, CapabilityResolver};
