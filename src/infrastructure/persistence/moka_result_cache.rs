use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use moka::policy::EvictionPolicy;

use crate::application::ports::{CachedResult, ResultCache};
use crate::domain::Fingerprint;

pub const DEFAULT_CAPACITY: u64 = 100;
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Bounded LRU cache of finished analyses. Each entry expires a fixed time
/// after insertion however often it is read.
#[derive(Clone)]
pub struct MokaResultCache {
    cache: Cache<Fingerprint, CachedResult>,
}

impl MokaResultCache {
    pub fn new(max_capacity: u64, time_to_live: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(time_to_live)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self { cache }
    }

    /// Applies pending evictions. Moka batches its housekeeping, so
    /// `entry_count` may lag behind inserts until this runs.
    pub async fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks().await;
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl Default for MokaResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}

#[async_trait]
impl ResultCache for MokaResultCache {
    async fn get(&self, fingerprint: &Fingerprint) -> Option<CachedResult> {
        self.cache.get(fingerprint).await
    }

    async fn put(&self, fingerprint: Fingerprint, result: CachedResult) {
        tracing::debug!(fingerprint = %fingerprint.short(), "Caching analysis result");
        self.cache.insert(fingerprint, result).await;
    }
}
