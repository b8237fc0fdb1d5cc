//! Plugin catalog assembly.
//!
//! The [`CatalogAggregator`] fans a query out to every registered
//! [`PluginSource`](crate::source::PluginSource) and merges the answers by
//! plugin name, keeping the newest version of each plugin. The
//! [`CatalogCache`] keeps the merged catalog for a configurable time so
//! repeated requests don't rescan the sources.

mod aggregator;
mod cache;
mod error;

pub use aggregator::CatalogAggregator;
pub use cache::{CacheEntry, CatalogCache};
pub use error::{CatalogError, CatalogResult};
