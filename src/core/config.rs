//! Configuration management for the plugin manager.
//!
//! Handles loading configuration from TOML files.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default CI server polled for plugin builds.
pub const DEFAULT_CI_URL: &str = "https://gerrit-ci.gerritforge.com";

/// Build color reported by the CI server for a healthy job.
pub const DEFAULT_HEALTHY_COLOR: &str = "blue";

/// Default catalog lifetime (24 hours).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 24 * 60 * 60;

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = ".plugin-manager.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Running host settings
    pub host: HostConfig,

    /// CI server settings
    pub ci: CiConfig,

    /// Catalog cache settings
    pub cache: CacheConfig,

    /// HTTP client settings
    pub http: HttpConfig,
}

/// The host whose plugins are being catalogued.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Version of the running host (empty when unknown)
    pub version: String,

    /// Bundled distribution archive (absent for non-archive deployments)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive: Option<PathBuf>,
}

/// CI server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CiConfig {
    /// Base URL of the CI server
    pub url: String,

    /// Build color of jobs whose artifacts are published
    pub healthy_color: String,

    /// Maximum number of jobs resolved concurrently
    pub max_concurrent_jobs: usize,
}

/// Catalog cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether to warm the cache at startup
    pub preload: bool,

    /// Catalog time-to-live in seconds
    pub ttl_secs: u64,
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Timeout for each remote call in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. `.plugin-manager.toml` in current directory
    /// 2. `~/.config/plugin-manager/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(global_config) = Self::global_config_path() {
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Path of the config file [`Config::load`] would read, if any exists.
    pub fn active_path() -> Option<PathBuf> {
        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }
        Self::global_config_path().filter(|path| path.exists())
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("plugin-manager"))
    }

    fn global_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Catalog time-to-live.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }

    /// Timeout applied to each remote call.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }
}

impl Default for CiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CI_URL.to_string(),
            healthy_color: DEFAULT_HEALTHY_COLOR.to_string(),
            max_concurrent_jobs: 8,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { preload: true, ttl_secs: DEFAULT_CACHE_TTL_SECS }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}
