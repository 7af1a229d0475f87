//! Registry integration tests
//!
//! Registration, replacement and introspection through the public API.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{self, register};
    use crate::common::providers::ScriptedProvider;
    use crate::{assert_err, assert_ok};
    use provider_capabilities::{
        Capability, CapabilityFactories, ProviderConfig, RegistryError,
    };

    /// Register tmdb with two capabilities and resolve one of them
    #[tokio::test]
    async fn test_tmdb_end_to_end() {
        let registry = fixtures::registry();
        let metadata = ScriptedProvider::new("tmdb");
        let catalog = ScriptedProvider::new("tmdb");

        assert_ok!(registry.register(
            "tmdb",
            CapabilityFactories::new()
                .with(Capability::Metadata, metadata.factory())
                .with(Capability::Catalog, catalog.factory()),
            ProviderConfig::new("tmdb").with_enabled(true).with_priority(1),
        ));

        assert_eq!(
            registry.available_capabilities("tmdb"),
            vec![Capability::Metadata, Capability::Catalog]
        );
        assert_eq!(
            registry.statistics().registrations_by_capability[&Capability::Metadata],
            1
        );

        let binding = registry
            .resolve_capability(Capability::Metadata)
            .await
            .expect("tmdb should serve metadata");
        assert_eq!(binding.provider_id, "tmdb");

        // Only the resolved capability was instantiated
        assert_eq!(metadata.constructed(), 1);
        assert_eq!(catalog.constructed(), 0);

        registry.shutdown().await;
    }

    /// Blank ids are lenient at the registry level
    #[test]
    fn test_blank_ids_return_empty_capabilities() {
        let registry = fixtures::registry();
        register(&registry, &ScriptedProvider::new("tmdb"), &[Capability::Search], 1);

        assert!(registry.available_capabilities("").is_empty());
        assert!(registry.available_capabilities("   ").is_empty());
        assert_eq!(
            registry.available_capabilities("  tmdb  "),
            registry.available_capabilities("tmdb")
        );
    }

    /// Re-registering an id replaces the old registration wholesale
    #[tokio::test]
    async fn test_reregistration_replaces_and_disposes() {
        let registry = fixtures::registry();
        let v1 = ScriptedProvider::new("mdblist");
        let v2 = ScriptedProvider::new("mdblist");

        register(&registry, &v1, &[Capability::Catalog, Capability::Recommendation], 3);
        assert!(registry.resolve_capability(Capability::Recommendation).await.is_some());

        register(&registry, &v2, &[Capability::Catalog], 3);

        assert_eq!(registry.available_capabilities("mdblist"), vec![Capability::Catalog]);
        assert_eq!(v1.disposed(), 1);
        assert!(registry.resolve_capability(Capability::Recommendation).await.is_none());
        assert_eq!(registry.list_providers(), vec!["mdblist".to_string()]);
    }

    /// Unknown capability keys are all reported and nothing is registered
    #[test]
    fn test_register_named_validation() {
        let registry = fixtures::registry();
        let provider = ScriptedProvider::new("trakt");

        let err = assert_err!(registry.register_named(
            "trakt",
            vec![
                ("CATALOG".to_string(), provider.factory()),
                ("SCROBBLE".to_string(), provider.factory()),
            ],
            ProviderConfig::new("trakt"),
        ));

        assert!(matches!(err, RegistryError::Validation(_)));
        assert!(err.to_string().contains("SCROBBLE"));
        assert!(registry.available_capabilities("trakt").is_empty());
        assert_eq!(registry.statistics().total_providers, 0);
    }

    /// Statistics and listings follow registrations and unregistrations
    #[tokio::test]
    async fn test_introspection_after_unregister() {
        let registry = fixtures::registry();
        let tmdb = ScriptedProvider::new("tmdb");
        let trakt = ScriptedProvider::new("trakt");
        register(&registry, &tmdb, &[Capability::Metadata, Capability::Search], 1);
        register(&registry, &trakt, &[Capability::Metadata], 2);

        assert_eq!(
            registry.list_providers(),
            vec!["tmdb".to_string(), "trakt".to_string()]
        );
        registry.resolve_capability(Capability::Metadata).await.unwrap();

        assert!(registry.unregister("tmdb"));

        let stats = registry.statistics();
        assert_eq!(stats.total_providers, 1);
        assert_eq!(stats.registrations_for(Capability::Metadata), 1);
        assert_eq!(stats.registrations_for(Capability::Search), 0);
        assert_eq!(stats.cached_resolutions, 0);
        assert_eq!(tmdb.disposed(), 1);

        let entries = registry.providers_for_capability(Capability::Metadata);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].provider_id, "trakt");
    }

    /// Statistics serialize with canonical capability names
    #[test]
    fn test_statistics_serialize() {
        let registry = fixtures::registry();
        register(&registry, &ScriptedProvider::new("tvdb"), &[Capability::ExternalIds], 1);

        let json = serde_json::to_value(registry.statistics()).unwrap();

        assert_eq!(json["total_providers"], 1);
        assert_eq!(json["registrations_by_capability"]["EXTERNAL_IDS"], 1);
        assert_eq!(json["registrations_by_capability"]["FILMOGRAPHY"], 0);
    }

    /// Shutdown disposes everything once and refuses new work
    #[tokio::test]
    async fn test_shutdown_lifecycle() {
        let registry = fixtures::registry();
        let tmdb = ScriptedProvider::new("tmdb");
        register(&registry, &tmdb, &[Capability::Metadata, Capability::Filmography], 1);
        registry.resolve_capability(Capability::Metadata).await.unwrap();
        registry.resolve_capability(Capability::Filmography).await.unwrap();

        registry.shutdown().await;
        registry.shutdown().await;

        assert!(registry.is_shut_down());
        assert_eq!(tmdb.disposed(), 2);
        assert!(registry.resolve_capability(Capability::Metadata).await.is_none());

        let err = assert_err!(registry.register(
            "tmdb",
            CapabilityFactories::new().with(Capability::Metadata, tmdb.factory()),
            ProviderConfig::new("tmdb"),
        ));
        assert!(matches!(err, RegistryError::Closed));
    }
}
