//! Helper functions for creating specific error types

use super::types::RegistryError;

impl RegistryError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn preferences<S: Into<String>>(message: S) -> Self {
        Self::Preferences(message.into())
    }

    /// Whether the error was caused by caller input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
