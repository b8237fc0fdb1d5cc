//! Time-bounded cache in front of the catalog aggregator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::{CatalogAggregator, CatalogResult};
use crate::core::Catalog;

/// A merged catalog and the moment it was built.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub catalog: Arc<Catalog>,
    pub created_at: Instant,
}

impl CacheEntry {
    fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog), created_at: Instant::now() }
    }

    /// Time since the entry was built.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Whether the entry has outlived `ttl`.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }
}

/// Single-slot cache of the merged catalog.
///
/// The host version is constant for a running process, so one slot is
/// enough. The slot lock is held while a miss recomputes the catalog:
/// concurrent callers wait for that one pass instead of starting their own,
/// and nobody observes a half-built entry.
#[derive(Debug)]
pub struct CatalogCache {
    aggregator: CatalogAggregator,
    ttl: Duration,
    slot: Mutex<Option<CacheEntry>>,
}

impl CatalogCache {
    /// Create an empty cache.
    pub fn new(aggregator: CatalogAggregator, ttl: Duration) -> Self {
        Self { aggregator, ttl, slot: Mutex::new(None) }
    }

    /// Get the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the catalog, rebuilding it when the slot is empty or expired.
    ///
    /// A failed rebuild leaves the slot empty and returns the error.
    pub async fn get(&self, host_version: &str) -> CatalogResult<Arc<Catalog>> {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref() {
            if !entry.is_expired(self.ttl) {
                tracing::debug!(age_secs = entry.age().as_secs(), "Catalog cache hit");
                return Ok(Arc::clone(&entry.catalog));
            }
            tracing::debug!(age_secs = entry.age().as_secs(), "Catalog cache entry expired");
        } else {
            tracing::debug!("Catalog cache miss");
        }

        *slot = None;
        let entry = CacheEntry::new(self.aggregator.merge(host_version).await?);
        let catalog = Arc::clone(&entry.catalog);
        *slot = Some(entry);
        Ok(catalog)
    }

    /// Drop the cached catalog.
    pub async fn invalidate(&self) {
        self.slot.lock().await.take();
    }

    /// Current entry, if any, without triggering a rebuild.
    pub async fn peek(&self) -> Option<CacheEntry> {
        self.slot.lock().await.clone()
    }

    /// Warm the cache on a detached task.
    ///
    /// The outcome is only logged.
    pub fn spawn_preload(self: &Arc<Self>, host_version: String) -> JoinHandle<()> {
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            tracing::info!("Start-up: pre-loading list of plugins from registries");
            match cache.get(&host_version).await {
                Ok(catalog) => tracing::info!("{} plugins successfully pre-loaded", catalog.len()),
                Err(e) => tracing::error!(error = %e, "Cannot access plugins list at this time"),
            }
        })
    }
}
