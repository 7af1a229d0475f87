//! Test fixtures
//!
//! Registry constructors and configuration documents shared by the
//! integration tests.

use provider_capabilities::{
    Capability, CapabilityFactories, HealthMonitorConfig, ProviderConfig, ProviderRegistry,
    RegistryConfig,
};

use super::providers::ScriptedProvider;

/// Registry without a background monitor
pub fn registry() -> ProviderRegistry {
    ProviderRegistry::new(RegistryConfig::without_monitoring()).unwrap()
}

/// Registry with a fast background monitor
pub fn monitored_registry(interval_ms: u64, check_timeout_ms: u64) -> ProviderRegistry {
    ProviderRegistry::new(RegistryConfig {
        health: HealthMonitorConfig {
            enabled: true,
            interval_ms,
            check_timeout_ms,
        },
        ..Default::default()
    })
    .unwrap()
}

/// Register `provider` for every capability in `capabilities`
pub fn register(
    registry: &ProviderRegistry,
    provider: &ScriptedProvider,
    capabilities: &[Capability],
    priority: i32,
) {
    let factories = capabilities
        .iter()
        .fold(CapabilityFactories::new(), |factories, capability| {
            factories.with(*capability, provider.factory())
        });

    registry
        .register(
            provider.name(),
            factories,
            ProviderConfig::new(provider.name()).with_priority(priority),
        )
        .unwrap_or_else(|e| panic!("failed to register {}: {}", provider.name(), e));
}

/// A complete registry configuration document
pub const REGISTRY_YAML: &str = r#"
health:
  enabled: true
  interval_ms: 15000
  check_timeout_ms: 2000
resolver:
  cache_ttl_ms: 10000
logging:
  level: debug
providers:
  - id: tmdb
    name: The Movie Database
    provider_type: tmdb
    priority: 1
    api_key: tmdb-secret
    base_url: https://api.themoviedb.org/3
  - id: trakt
    priority: 2
    enabled: false
"#;
