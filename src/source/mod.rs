//! Plugin sources.
//!
//! A source produces plugin metadata from one origin. Two sources ship with
//! the crate:
//!
//! - [`ArchiveSource`] inspects the plugins bundled inside the host's
//!   distribution archive
//! - [`JenkinsSource`] walks the build history of a Jenkins CI server
//!
//! Sources degrade to an empty list with a warning when what they look for
//! is simply absent, and return an error only when the origin itself cannot
//! be read.

mod archive;
mod descriptions;
mod error;
mod http;
mod jenkins;

pub use archive::{ArchiveSource, MANIFEST_PATH, PLUGINS_DIR};
pub use descriptions::CorePluginDescriptions;
pub use error::{SourceError, SourceResult};
pub use http::{fetch_json, join_url, HttpFetch, ReqwestFetcher};
pub use jenkins::{plugin_name_from_path, JenkinsSource};

use async_trait::async_trait;

use crate::core::PluginRecord;

/// Trait for plugin sources.
#[async_trait]
pub trait PluginSource: Send + Sync {
    /// Get the name of this source.
    fn name(&self) -> &str;

    /// List the plugins this source offers for a host version.
    async fn list(&self, host_version: &str) -> SourceResult<Vec<PluginRecord>>;
}
