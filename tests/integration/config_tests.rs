//! Configuration integration tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::REGISTRY_YAML;
    use crate::common::providers::ScriptedProvider;
    use crate::{assert_err, assert_ok};
    use provider_capabilities::{
        Capability, CapabilityFactories, Config, ProviderRegistry, RegistryError,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// A YAML document drives monitor, resolver and provider settings
    #[tokio::test]
    async fn test_load_config_and_register_configured_providers() {
        let file = write_config(REGISTRY_YAML);
        let config = assert_ok!(Config::from_file(file.path()).await);

        assert_eq!(config.health().interval_ms, 15_000);
        assert_eq!(config.health().check_timeout_ms, 2_000);
        assert_eq!(config.resolver().cache_ttl_ms, 10_000);
        assert_eq!(config.resolver().health_staleness_ms, 60_000);
        assert_eq!(config.logging().level, "debug");
        assert_eq!(config.providers().len(), 2);

        let registry = ProviderRegistry::new(config.registry.clone()).unwrap();
        let tmdb = ScriptedProvider::new("tmdb");
        let trakt = ScriptedProvider::new("trakt");
        registry
            .register_configured(
                "tmdb",
                CapabilityFactories::new().with(Capability::Metadata, tmdb.factory()),
            )
            .unwrap();
        registry
            .register_configured(
                "trakt",
                CapabilityFactories::new().with(Capability::Metadata, trakt.factory()),
            )
            .unwrap();

        let tmdb_config = registry.provider_config("tmdb").unwrap();
        assert_eq!(tmdb_config.name, "The Movie Database");
        assert_eq!(tmdb_config.api_key.as_deref(), Some("tmdb-secret"));
        assert!(!registry.provider_config("trakt").unwrap().enabled);

        let binding = registry.resolve_capability(Capability::Metadata).await.unwrap();
        assert_eq!(binding.provider_id, "tmdb");
        registry.shutdown().await;
    }

    /// Invalid documents are rejected as configuration errors
    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let documents = [
            "health:\n  interval_ms: 0\n",
            "resolver:\n  cache_ttl_ms: 0\n",
            "providers:\n  - id: tmdb\n  - id: ' tmdb '\n",
            "providers:\n  - id: '  '\n",
            "providers: [not, a, provider",
        ];

        for document in documents {
            let file = write_config(document);
            let err = assert_err!(Config::from_file(file.path()).await);
            assert!(matches!(err, RegistryError::Config(_)), "{}", document);
        }
    }

    /// A missing file is a configuration error
    #[tokio::test]
    async fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = assert_err!(Config::from_file(dir.path().join("absent.yaml")).await);
        assert!(matches!(err, RegistryError::Config(_)));
    }

    /// The shipped example configuration is valid
    #[tokio::test]
    async fn test_example_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/registry.yaml.example");
        let config = assert_ok!(Config::from_file(path).await);

        assert_eq!(config.health().interval_ms, 30_000);
        assert_eq!(config.providers().len(), 3);
        assert!(!config.provider("mdblist").unwrap().enabled);
        assert_eq!(config.provider("trakt").unwrap().settings["page_size"], 50);
    }
}
