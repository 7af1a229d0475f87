//! Core traits module
//!
//! Contains the abstract interface every capability instance implements

pub mod capability_provider;

pub use capability_provider::CapabilityProvider;
