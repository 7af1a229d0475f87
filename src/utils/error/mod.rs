//! Error handling for the registry
//!
//! This module defines the error types surfaced by the registry façade, the
//! configuration layer and the capability use cases.

mod helpers;
mod types;

pub use types::{RegistryError, Result};
