//! Use cases built on the registry

pub mod get_provider_capabilities;
pub mod preferences;
pub mod update_provider_capabilities;

pub use get_provider_capabilities::GetProviderCapabilities;
pub use preferences::{
    CapabilitySetting, CapabilitySettings, InMemoryPreferencesStore, PreferencesStore,
};
pub use update_provider_capabilities::UpdateProviderCapabilities;
