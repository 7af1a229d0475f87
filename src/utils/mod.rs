//! Utility modules
//!
//! - **error**: Error types and helpers
//! - **logging**: Subscriber setup for `tracing`

pub mod error;
pub mod logging;

pub use error::{RegistryError, Result};
pub use logging::init_logging;
