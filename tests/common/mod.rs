//! Common test utilities for provider-capabilities
//!
//! - Scriptable capability providers with observable counters
//! - Registry and configuration fixtures
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{fixtures, providers::ScriptedProvider};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let registry = fixtures::registry();
//!     let tmdb = ScriptedProvider::new("tmdb");
//!     // ...
//! }
//! ```

pub mod fixtures;

pub use fixtures::{monitored_registry, registry};
pub use providers::ScriptedProvider;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err and return the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
