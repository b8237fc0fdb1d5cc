//! # Plugin Manager
//!
//! Discovers the plugins installable on a running host and reports their
//! metadata.
//!
//! The catalog is assembled from several plugin sources and cached in memory:
//!
//! - **Bundled archive**: plugins shipped inside the host's own distribution
//! - **CI server**: the latest healthy builds published by a Jenkins instance
//! - **Version precedence**: when both offer a plugin, the newer version wins
//! - **Cache**: the merged catalog is kept for a configurable lifetime
//!
//! Nothing is downloaded or installed; only name, description, version,
//! revision and download URL are reported.
//!
//! ## Quick Start
//!
//! ```bash
//! # List plugins available for a host version
//! plugin-manager --host-version 3.5.1 list
//!
//! # Show which CI branch a host version maps to
//! plugin-manager branch 3.5.1
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_let_else)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::significant_drop_tightening)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::case_sensitive_file_extension_comparisons)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod catalog;
pub mod core;
pub mod source;

// Re-export commonly used types
pub use app::App;
pub use catalog::{CatalogAggregator, CatalogCache, CatalogError};
pub use core::{Catalog, Config, PluginRecord};
pub use source::{ArchiveSource, JenkinsSource, PluginSource, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "plugin-manager";
