//! Fan-out over plugin sources and merge by plugin name.

use std::sync::Arc;

use futures::future::try_join_all;

use super::{CatalogError, CatalogResult};
use crate::core::Catalog;
use crate::source::PluginSource;

/// Merges the plugins of every registered source into one catalog.
///
/// Sources are queried concurrently. Their answers are merged in
/// registration order, so when two sources offer the same plugin at equal
/// versions the earlier-registered source wins.
#[derive(Default)]
pub struct CatalogAggregator {
    sources: Vec<Arc<dyn PluginSource>>,
}

impl std::fmt::Debug for CatalogAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogAggregator").field("sources", &self.source_names()).finish()
    }
}

impl CatalogAggregator {
    /// Create an aggregator without sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source.
    pub fn register(&mut self, source: Arc<dyn PluginSource>) {
        self.sources.push(source);
    }

    /// Register a source, builder style.
    pub fn with_source(mut self, source: Arc<dyn PluginSource>) -> Self {
        self.register(source);
        self
    }

    /// Get the number of sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Names of the registered sources, in registration order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Query every source and merge the results.
    ///
    /// Fails as a whole when any source fails.
    pub async fn merge(&self, host_version: &str) -> CatalogResult<Catalog> {
        let batches = try_join_all(self.sources.iter().map(|source| async move {
            match source.list(host_version).await {
                Ok(plugins) => {
                    tracing::debug!(source = source.name(), count = plugins.len(), "Source listed plugins");
                    Ok(plugins)
                }
                Err(e) => {
                    tracing::error!(source = source.name(), error = %e, "Source failed");
                    Err(CatalogError::unavailable(source.name(), e))
                }
            }
        }))
        .await?;

        let mut catalog = Catalog::new();
        for batch in batches {
            catalog.merge_all(batch);
        }

        tracing::info!(host_version, count = catalog.len(), "Plugin catalog merged");
        Ok(catalog)
    }
}
