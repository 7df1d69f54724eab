//! End-to-end tests for the translation and transliteration entry points
//!
//! Everything here runs against mock backends. Tests that need a real
//! provider are `#[ignore]`d:
//!
//! ```bash
//! HF_API_TOKEN=... cargo test --lib mt::integration_tests -- --ignored --nocapture
//! ```

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::{ChatMode, Tarjimon};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn mapped_factory() -> Arc<MockFactory> {
        let mut map = HashMap::new();
        map.insert(("Salom".to_string(), Language::Ru), "Привет".to_string());
        map.insert(("Привет".to_string(), Language::En), "Hello".to_string());
        map.insert(("Hello".to_string(), Language::Ru), "Привет".to_string());
        map.insert(("Привет".to_string(), Language::Uz), "Salom".to_string());
        Arc::new(MockFactory::new(MockMode::Mappings(map)))
    }

    // ============================================================================
    // Transliteration mode
    // ============================================================================

    #[tokio::test]
    async fn test_transliterate_mode_single_letters() {
        let tarjimon = Tarjimon::new(Arc::new(MockFactory::new(MockMode::Suffix)));
        let out = tarjimon
            .handle("salom", &ChatMode::Transliterate)
            .await
            .unwrap();
        assert_eq!(out, "салом");
    }

    #[tokio::test]
    async fn test_transliterate_mode_digraph() {
        let tarjimon = Tarjimon::new(Arc::new(MockFactory::new(MockMode::Suffix)));
        let out = tarjimon
            .handle("o‘zbek", &ChatMode::Transliterate)
            .await
            .unwrap();
        assert_eq!(out, "ўзбек");
        assert_eq!(tarjimon.transliterate("ўзбек"), "o‘zbek");
    }

    #[tokio::test]
    async fn test_transliterate_mode_never_touches_backends() {
        let factory = Arc::new(MockFactory::new(MockMode::Error("down".to_string())));
        let tarjimon = Tarjimon::new(factory.clone());
        assert!(tarjimon.handle("", &ChatMode::Transliterate).await.is_ok());
        assert_eq!(factory.acquisitions(), 0);
    }

    // ============================================================================
    // Translation mode
    // ============================================================================

    #[tokio::test]
    async fn test_pivot_translation_uz_to_en() {
        let factory = mapped_factory();
        let tarjimon = Tarjimon::new(factory.clone());

        let out = tarjimon.translate("Salom", "uz", "en").await.unwrap();

        assert_eq!(out, "Hello");
        assert_eq!(
            factory.acquired_keys(),
            vec!["Helsinki-NLP/opus-mt-uz-ru", "Helsinki-NLP/opus-mt-ru-en"]
        );
    }

    #[tokio::test]
    async fn test_pivot_translation_en_to_uz() {
        let tarjimon = Tarjimon::new(mapped_factory());
        let mode = ChatMode::Translate {
            source: Language::En,
            target: Language::Uz,
        };
        assert_eq!(tarjimon.handle("Hello", &mode).await.unwrap(), "Salom");
    }

    #[tokio::test]
    async fn test_translate_with_precomputed_plan() {
        let factory = mapped_factory();
        let tarjimon = Tarjimon::new(factory.clone());

        let route = tarjimon.routes().plan(Language::Uz, Language::En).unwrap();
        assert_eq!(route.to_string(), "uz->ru->en");

        let out = tarjimon.translate_plan("Salom", &route).await.unwrap();
        assert_eq!(out, "Hello");
        assert_eq!(factory.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_tags_are_normalized() {
        let tarjimon = Tarjimon::new(Arc::new(MockFactory::new(MockMode::Suffix)));
        let out = tarjimon.translate("salom", " UZ", "Ru\t").await.unwrap();
        assert_eq!(out, "salom_ru");
    }

    #[tokio::test]
    async fn test_same_language_short_circuits() {
        let factory = Arc::new(MockFactory::new(MockMode::Suffix));
        let tarjimon = Tarjimon::new(factory.clone());
        assert_eq!(tarjimon.translate("salom", "uz", "UZ").await.unwrap(), "salom");
        assert_eq!(factory.acquisitions(), 0);
    }

    #[tokio::test]
    async fn test_invalid_tag() {
        let tarjimon = Tarjimon::new(Arc::new(MockFactory::new(MockMode::Suffix)));
        assert!(matches!(
            tarjimon.translate("salom", "uz", "de").await,
            Err(MtError::InvalidLanguage(_))
        ));
    }

    #[tokio::test]
    async fn test_route_unsupported_with_reduced_table() {
        let routes = RouteTable::default()
            .with_direct(Hop::new(Language::Uz, Language::Ru), "m-uz-ru")
            .with_direct(Hop::new(Language::Ru, Language::En), "m-ru-en");
        let tarjimon =
            Tarjimon::with_routes(routes, Arc::new(MockFactory::new(MockMode::Suffix)));

        assert_eq!(
            tarjimon.translate("salom", "uz", "en").await,
            Err(MtError::RouteUnsupported {
                source: Language::Uz,
                target: Language::En,
            })
        );
        assert_eq!(tarjimon.translate("salom", "uz", "ru").await.unwrap(), "salom_ru");
    }

    #[tokio::test]
    async fn test_backend_reused_across_requests() {
        let factory = Arc::new(MockFactory::new(MockMode::Suffix));
        let tarjimon = Tarjimon::new(factory.clone());

        for _ in 0..3 {
            tarjimon.translate("salom", "uz", "en").await.unwrap();
            tarjimon.translate("hi", "en", "ru").await.unwrap();
        }

        // uz->ru, ru->en, en->ru
        assert_eq!(factory.acquisitions(), 3);
        assert_eq!(tarjimon.cache().len(), 3);
    }

    #[tokio::test]
    async fn test_backend_failure_surfaces_and_retry_succeeds() {
        let factory = Arc::new(MockFactory::failing_first(MockMode::Suffix, 1));
        let tarjimon = Tarjimon::new(factory);

        let err = tarjimon.translate("salom", "uz", "ru").await.unwrap_err();
        assert!(err.is_backend_failure());
        assert_eq!(
            tarjimon.translate("salom", "uz", "ru").await.unwrap(),
            "salom_ru"
        );
    }

    #[tokio::test]
    async fn test_mock_backend_from_config() {
        let config = crate::Config::default().with_backend(crate::BackendKind::Mock);
        let tarjimon = Tarjimon::from_config(&config).unwrap();
        assert_eq!(
            tarjimon.translate("salom", "uz", "en").await.unwrap(),
            "salom_ru_en"
        );
    }

    // ============================================================================
    // Live backend
    // ============================================================================

    #[tokio::test]
    #[ignore]
    async fn test_live_pivot_translation() {
        let Ok(config) = crate::Config::from_env() else {
            eprintln!("⚠️  Skipping: invalid environment configuration");
            return;
        };
        let Ok(tarjimon) = Tarjimon::from_config(&config) else {
            eprintln!("⚠️  Skipping: no credentials for {}", config.backend);
            return;
        };

        let out = tarjimon
            .translate("Bugun havo juda yaxshi.", "uz", "en")
            .await
            .expect("pivot translation failed");
        println!("uz->ru->en: {}", out);
        assert!(!out.is_empty());
    }
}
