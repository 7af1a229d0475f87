//! Integration tests for provider-capabilities
//!
//! These tests drive the public API with scripted providers and verify the
//! interaction between registration, resolution and health monitoring.

pub mod config_tests;
pub mod registry_tests;
pub mod use_case_tests;
