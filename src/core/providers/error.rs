//! Provider error types

use thiserror::Error;

/// Errors raised by provider factories and capability instances
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider {provider} is unavailable: {message}")]
    Unavailable { provider: String, message: String },

    #[error("Health check failed for {provider}: {message}")]
    HealthCheck { provider: String, message: String },

    #[error("Health check for {provider} timed out after {timeout_ms}ms")]
    Timeout { provider: String, timeout_ms: u64 },

    #[error("Failed to construct {capability} for {provider}: {message}")]
    Construction {
        provider: String,
        capability: String,
        message: String,
    },

    #[error("Provider {provider} error: {message}")]
    Other { provider: String, message: String },
}

impl ProviderError {
    pub fn unavailable(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn health_check(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::HealthCheck {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn timeout(provider: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            provider: provider.into(),
            timeout_ms,
        }
    }

    pub fn construction(
        provider: impl Into<String>,
        capability: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Construction {
            provider: provider.into(),
            capability: capability.into(),
            message: message.into(),
        }
    }

    pub fn other(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Other {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Get the provider id that caused this error
    pub fn provider(&self) -> &str {
        match self {
            Self::Unavailable { provider, .. }
            | Self::HealthCheck { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::Construction { provider, .. }
            | Self::Other { provider, .. } => provider,
        }
    }
}
