//! Executes a [`RoutePlan`] hop by hop.

use crate::mt::cache::BackendCache;
use crate::mt::error::MtResult;
use crate::mt::routes::RoutePlan;
use tracing::{debug, warn};

/// Run `plan` over `text`
///
/// The output of each hop is fed unchanged into the next. The first failure
/// aborts the plan: later hops are not invoked, nothing is retried and no
/// alternate route is tried.
pub async fn execute(cache: &BackendCache, plan: &RoutePlan, text: &str) -> MtResult<String> {
    let mut current = text.to_string();

    for hop in plan.hops() {
        let backend = cache.get_backend(hop).await?;
        debug!(%hop, provider = backend.provider_name(), chars = current.chars().count(), "translating hop");
        let translated = backend.translate(&current, hop).await.inspect_err(|e| {
            warn!(%hop, error = %e, "hop failed");
        })?;
        current = translated;
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mt::error::MtError;
    use crate::mt::language::{Hop, Language::*};
    use crate::mt::mock::{MockFactory, MockMode};
    use crate::mt::routes::{RouteTable, plan};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn cache(factory: Arc<MockFactory>) -> BackendCache {
        BackendCache::new(RouteTable::standard().clone(), factory)
    }

    #[tokio::test]
    async fn test_identity_invokes_nothing() {
        let factory = Arc::new(MockFactory::new(MockMode::Suffix));
        let cache = cache(factory.clone());

        let out = execute(&cache, &RoutePlan::Identity, "salom").await.unwrap();
        assert_eq!(out, "salom");
        assert_eq!(factory.acquisitions(), 0);
        assert!(factory.calls().is_empty());
    }

    #[tokio::test]
    async fn test_direct_invokes_once() {
        let factory = Arc::new(MockFactory::new(MockMode::Suffix));
        let cache = cache(factory.clone());

        let out = execute(&cache, &plan(Uz, Ru).unwrap(), "salom").await.unwrap();
        assert_eq!(out, "salom_ru");
        assert_eq!(factory.calls(), vec![(Hop::new(Uz, Ru), "salom".to_string())]);
    }

    #[tokio::test]
    async fn test_pivot_feeds_first_output_into_second() {
        let mut map = HashMap::new();
        map.insert(("salom".to_string(), Ru), "привет".to_string());
        map.insert(("привет".to_string(), En), "hello".to_string());
        let factory = Arc::new(MockFactory::new(MockMode::Mappings(map)));
        let cache = cache(factory.clone());

        let out = execute(&cache, &plan(Uz, En).unwrap(), "salom").await.unwrap();

        assert_eq!(out, "hello");
        assert_eq!(
            factory.calls(),
            vec![
                (Hop::new(Uz, Ru), "salom".to_string()),
                (Hop::new(Ru, En), "привет".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_first_hop_failure_skips_second() {
        let factory = Arc::new(
            MockFactory::new(MockMode::Suffix)
                .with_override(Hop::new(En, Ru), MockMode::Error("quota".to_string())),
        );
        let cache = cache(factory.clone());

        let err = execute(&cache, &plan(En, Uz).unwrap(), "hello")
            .await
            .unwrap_err();

        assert_eq!(err, MtError::BackendFailure("quota".to_string()));
        assert_eq!(factory.calls(), vec![(Hop::new(En, Ru), "hello".to_string())]);
        // The second leg's backend was never even acquired.
        assert_eq!(factory.acquisitions(), 1);
    }

    #[tokio::test]
    async fn test_second_hop_failure_is_propagated() {
        let factory = Arc::new(
            MockFactory::new(MockMode::Suffix)
                .with_override(Hop::new(Ru, Uz), MockMode::Error("oom".to_string())),
        );
        let cache = cache(factory.clone());

        let err = execute(&cache, &plan(En, Uz).unwrap(), "hello")
            .await
            .unwrap_err();
        assert!(err.is_backend_failure());
        assert_eq!(factory.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_acquisition_failure_aborts_plan() {
        let factory = Arc::new(MockFactory::failing_first(MockMode::Suffix, 1));
        let cache = cache(factory.clone());

        let err = execute(&cache, &plan(Uz, En).unwrap(), "salom")
            .await
            .unwrap_err();
        assert!(matches!(err, MtError::AcquisitionFailure { .. }));
        assert!(factory.calls().is_empty());
    }
}
