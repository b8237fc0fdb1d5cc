//! Application wiring.
//!
//! [`App`] builds the plugin sources from the configuration, registers them
//! with the aggregator and owns the process-wide catalog cache.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::catalog::{CatalogAggregator, CatalogCache, CatalogResult};
use crate::core::{Catalog, Config};
use crate::source::{ArchiveSource, JenkinsSource, PluginSource, ReqwestFetcher, SourceResult};

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    cache: Arc<CatalogCache>,
}

impl App {
    /// Create the application with the default sources.
    ///
    /// The archive source is registered first, so on equal versions the
    /// bundled plugin is kept over the CI build.
    pub fn new(config: Config) -> SourceResult<Self> {
        let http = Arc::new(ReqwestFetcher::new(config.http_timeout())?);

        let sources: Vec<Arc<dyn PluginSource>> = vec![
            Arc::new(ArchiveSource::new(config.host.version.clone(), config.host.archive.clone())),
            Arc::new(JenkinsSource::from_config(&config.ci, http)),
        ];

        Ok(Self::with_sources(config, sources))
    }

    /// Create the application over an explicit set of sources.
    pub fn with_sources(config: Config, sources: Vec<Arc<dyn PluginSource>>) -> Self {
        let aggregator = sources.into_iter().fold(CatalogAggregator::new(), CatalogAggregator::with_source);
        let cache = Arc::new(CatalogCache::new(aggregator, config.cache_ttl()));

        tracing::debug!(
            host_version = %config.host.version,
            ttl_secs = config.cache.ttl_secs,
            "Plugin manager initialized"
        );

        Self { config, cache }
    }

    /// Version of the running host.
    pub fn host_version(&self) -> &str {
        &self.config.host.version
    }

    /// Start-up hook: warm the catalog cache when preloading is enabled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> Option<JoinHandle<()>> {
        if !self.config.cache.preload {
            tracing::debug!("Catalog preload disabled");
            return None;
        }
        Some(self.cache.spawn_preload(self.host_version().to_string()))
    }

    /// Get the merged plugin catalog.
    pub async fn catalog(&self) -> CatalogResult<Arc<Catalog>> {
        self.cache.get(self.host_version()).await
    }

    /// Get the catalog cache.
    pub fn cache(&self) -> &Arc<CatalogCache> {
        &self.cache
    }
}
