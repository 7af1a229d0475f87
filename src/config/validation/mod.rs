//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `registry_validators`: Registry, health, resolver and provider validators
//! - `tests`: Test suite for all validators

mod registry_validators;
mod trait_def;

pub use trait_def::Validate;
