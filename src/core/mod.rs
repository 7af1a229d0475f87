//! Core functionality
//!
//! This module contains the capability model, the provider registry and the
//! machinery around it.

pub mod capability;
pub mod health;
pub mod providers;
pub mod registry;
pub mod resolver;
pub mod traits;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;
