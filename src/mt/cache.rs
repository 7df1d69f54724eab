//! Lazily populated backend cache
//!
//! One [`OnceCell`] per direct hop. The map lock is held only while finding
//! or inserting the cell; acquisition itself runs inside the cell, so
//! concurrent first requests for the same hop wait for a single acquisition
//! while other hops proceed independently. Failed acquisitions leave the cell
//! empty and are retried on the next request. Entries are never evicted.

use crate::mt::error::{MtError, MtResult};
use crate::mt::language::Hop;
use crate::mt::routes::RouteTable;
use crate::mt::translator::{Backend, BackendFactory};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;
use tracing::info;

pub struct BackendCache {
    routes: RouteTable,
    factory: Arc<dyn BackendFactory>,
    cells: Mutex<HashMap<Hop, Arc<OnceCell<Backend>>>>,
}

impl BackendCache {
    pub fn new(routes: RouteTable, factory: Arc<dyn BackendFactory>) -> Self {
        Self {
            routes,
            factory,
            cells: Mutex::new(HashMap::new()),
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Backend for `hop`, acquiring it on first use
    ///
    /// # Panics
    ///
    /// If `hop` is not a direct route of this cache's table. The planner only
    /// emits direct hops, so reaching this is a bug in the caller.
    pub async fn get_backend(&self, hop: Hop) -> MtResult<Backend> {
        let Some(resource_key) = self.routes.resource_key(hop) else {
            panic!("backend requested for {hop}, which is not a direct route");
        };

        let cell = self.cell_for(hop);
        let backend = cell
            .get_or_try_init(|| async {
                info!(%hop, resource_key, "acquiring backend");
                let backend = self.factory.acquire(hop, resource_key).await?;
                info!(%hop, provider = backend.provider_name(), "backend ready");
                Ok::<_, MtError>(backend)
            })
            .await?;

        Ok(Arc::clone(backend))
    }

    /// Number of hops whose backend has been constructed
    pub fn len(&self) -> usize {
        self.lock_cells()
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cell_for(&self, hop: Hop) -> Arc<OnceCell<Backend>> {
        let mut cells = self.lock_cells();
        Arc::clone(cells.entry(hop).or_insert_with(|| Arc::new(OnceCell::new())))
    }

    fn lock_cells(&self) -> std::sync::MutexGuard<'_, HashMap<Hop, Arc<OnceCell<Backend>>>> {
        // The guarded map is only ever inserted into, so a poisoned lock
        // still holds a consistent map.
        self.cells.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for BackendCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendCache")
            .field("routes", &self.routes)
            .field("constructed", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mt::language::Language::*;
    use crate::mt::mock::{MockFactory, MockMode};
    use tokio::task::JoinSet;

    fn cache_with(factory: Arc<MockFactory>) -> BackendCache {
        BackendCache::new(RouteTable::standard().clone(), factory)
    }

    #[tokio::test]
    async fn test_first_call_acquires_then_reuses() {
        let factory = Arc::new(MockFactory::new(MockMode::Suffix));
        let cache = cache_with(factory.clone());
        let hop = Hop::new(Uz, Ru);

        assert!(cache.is_empty());
        let a = cache.get_backend(hop).await.unwrap();
        let b = cache.get_backend(hop).await.unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(factory.acquisitions(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_distinct_hops_get_distinct_backends() {
        let factory = Arc::new(MockFactory::new(MockMode::Suffix));
        let cache = cache_with(factory.clone());

        let a = cache.get_backend(Hop::new(Uz, Ru)).await.unwrap();
        let b = cache.get_backend(Hop::new(Ru, En)).await.unwrap();

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(factory.acquisitions(), 2);
        assert_eq!(factory.acquired_keys().len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_calls_acquire_once() {
        let factory = Arc::new(MockFactory::with_delay(MockMode::Suffix, 50));
        let cache = Arc::new(cache_with(factory.clone()));
        let hop = Hop::new(En, Ru);

        let mut tasks = JoinSet::new();
        for _ in 0..16 {
            let cache = Arc::clone(&cache);
            tasks.spawn(async move { cache.get_backend(hop).await.unwrap() });
        }

        let mut backends = Vec::new();
        while let Some(result) = tasks.join_next().await {
            backends.push(result.unwrap());
        }

        assert_eq!(backends.len(), 16);
        assert_eq!(factory.acquisitions(), 1);
        for backend in &backends[1..] {
            assert!(Arc::ptr_eq(&backends[0], backend));
        }
    }

    #[tokio::test]
    async fn test_failed_acquisition_is_retried_later() {
        let factory = Arc::new(MockFactory::failing_first(MockMode::Suffix, 1));
        let cache = cache_with(factory.clone());
        let hop = Hop::new(Ru, Uz);

        let err = cache.get_backend(hop).await.err().unwrap();
        assert!(matches!(err, MtError::AcquisitionFailure { .. }));
        assert!(cache.is_empty());

        assert!(cache.get_backend(hop).await.is_ok());
        assert_eq!(factory.acquisitions(), 2);
    }

    #[tokio::test]
    #[should_panic(expected = "not a direct route")]
    async fn test_non_direct_hop_panics() {
        let cache = cache_with(Arc::new(MockFactory::new(MockMode::Suffix)));
        let _ = cache.get_backend(Hop::new(Uz, En)).await;
    }
}
