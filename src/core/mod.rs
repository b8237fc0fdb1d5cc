//! Core types and functionality for the plugin manager.
//!
//! This module contains the fundamental data structures and pure functions
//! used throughout the crate: plugin records, the catalog, version handling,
//! and configuration.

mod branch;
mod config;
mod precedence;
mod record;

pub use branch::{branch_for, view_name, MASTER_BRANCH, VIEW_PREFIX};
pub use config::{
    CacheConfig, CiConfig, Config, HostConfig, HttpConfig, DEFAULT_CACHE_TTL_SECS, DEFAULT_CI_URL,
    DEFAULT_HEALTHY_COLOR, LOCAL_CONFIG_FILE,
};
pub use precedence::{compare_versions, is_newer};
pub use record::{Catalog, PluginRecord};
