//! Error types for the registry

use crate::core::providers::ProviderError;
use thiserror::Error;

/// Result type alias for the registry
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Main error type for the registry
///
/// Only caller-input problems are surfaced through this type. Unknown providers
/// and unresolvable capabilities are reported as empty results instead.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Malformed input to a registration call or a use case
    #[error("Validation error: {0}")]
    Validation(String),

    /// The registry has been shut down
    #[error("Registry is shut down")]
    Closed,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// User preferences store errors
    #[error("Preferences error: {0}")]
    Preferences(String),

    /// Provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
