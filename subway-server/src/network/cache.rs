//! Versioned cache for shortest-path results.
//!
//! Entries are keyed by the topology version they were computed against,
//! so any edit (which bumps the version) makes older entries unreachable
//! without an explicit invalidation pass. Stale entries age out via TTL
//! and capacity eviction.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use super::path::Path;
use crate::domain::StationId;

/// Cache key: (topology version, source, target).
type PathKey = (u64, StationId, StationId);

/// Configuration for the path cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCacheConfig {
    /// Whether results are cached at all.
    pub enabled: bool,

    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for PathCacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: Duration::from_secs(300),
            max_capacity: 10_000,
        }
    }
}

/// Cache for computed paths. A disabled cache never stores anything.
#[derive(Clone)]
pub struct PathCache {
    paths: Option<MokaCache<PathKey, Arc<Path>>>,
}

impl PathCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &PathCacheConfig) -> Self {
        let paths = config.enabled.then(|| {
            MokaCache::builder()
                .time_to_live(config.ttl)
                .max_capacity(config.max_capacity)
                .build()
        });
        Self { paths }
    }

    /// A cache that always misses.
    pub fn disabled() -> Self {
        Self { paths: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.paths.is_some()
    }

    pub async fn get(&self, version: u64, source: StationId, target: StationId) -> Option<Arc<Path>> {
        self.paths.as_ref()?.get(&(version, source, target)).await
    }

    pub async fn insert(&self, version: u64, source: StationId, target: StationId, path: Arc<Path>) {
        if let Some(paths) = &self.paths {
            paths.insert((version, source, target), path).await;
        }
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.paths.as_ref().map_or(0, MokaCache::entry_count)
    }
}
