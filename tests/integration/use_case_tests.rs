//! Use case integration tests

#[cfg(test)]
mod tests {
    use crate::assert_err;
    use crate::common::fixtures::{self, register};
    use crate::common::providers::ScriptedProvider;
    use provider_capabilities::{
        Capability, GetProviderCapabilities, InMemoryPreferencesStore, PreferencesStore,
        UpdateProviderCapabilities,
    };
    use serde_json::json;
    use std::sync::Arc;

    /// The use case is stricter about blank ids than the registry
    #[test]
    fn test_get_capabilities_validates_where_registry_is_lenient() {
        let registry = Arc::new(fixtures::registry());
        register(
            &registry,
            &ScriptedProvider::new("tmdb"),
            &[Capability::Metadata, Capability::Catalog],
            1,
        );
        let use_case = GetProviderCapabilities::new(registry.clone());

        assert!(registry.available_capabilities("").is_empty());
        let err = assert_err!(use_case.execute(""));
        assert!(err.is_validation());

        assert_eq!(
            use_case.execute("tmdb").unwrap(),
            vec![Capability::Metadata, Capability::Catalog]
        );
        assert!(use_case.execute("mdblist").unwrap().is_empty());
    }

    /// Settings are stored without touching the registry
    #[tokio::test]
    async fn test_update_capabilities_persists_preferences() {
        let registry = Arc::new(fixtures::registry());
        register(&registry, &ScriptedProvider::new("trakt"), &[Capability::Catalog], 1);
        let store = Arc::new(InMemoryPreferencesStore::new());
        let use_case = UpdateProviderCapabilities::new(store.clone());

        use_case
            .execute(
                "trakt",
                &json!({
                    "CATALOG": { "enabled": false },
                    "RECOMMENDATION": { "enabled": true }
                }),
            )
            .await
            .unwrap();

        let settings = store.capability_settings("trakt").await.unwrap();
        assert_eq!(settings.len(), 2);
        assert!(!settings[&Capability::Catalog].enabled);
        assert!(settings[&Capability::Recommendation].enabled);

        // The registry still reports what the provider can serve
        assert_eq!(registry.available_capabilities("trakt"), vec![Capability::Catalog]);
        assert!(registry.resolve_capability(Capability::Catalog).await.is_some());
    }

    /// Invalid settings leave the store untouched
    #[tokio::test]
    async fn test_update_capabilities_rejects_unknown_capability() {
        let store = Arc::new(InMemoryPreferencesStore::new());
        let use_case = UpdateProviderCapabilities::new(store.clone());

        let err = assert_err!(
            use_case
                .execute(
                    "trakt",
                    &json!({
                        "CATALOG": { "enabled": true },
                        "SCROBBLE": { "enabled": true }
                    }),
                )
                .await
        );

        assert!(err.is_validation());
        assert!(store.capability_settings("trakt").await.unwrap().is_empty());
    }
}
