//! Plugin metadata records and the merged catalog.
//!
//! A [`PluginRecord`] is what every source produces; a [`Catalog`] is the
//! deduplicated, name-ordered result of merging them.

use std::collections::btree_map::{self, BTreeMap, Entry};

use serde::{Deserialize, Serialize};

use super::precedence::is_newer;

/// Metadata about one installable plugin.
///
/// Two records describe the same plugin when their names match; every other
/// field is payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRecord {
    /// Plugin name (unique identifier)
    pub name: String,

    /// Human readable description, may be empty
    #[serde(default)]
    pub description: String,

    /// Opaque version label, may be empty
    #[serde(default)]
    pub version: String,

    /// Short source control revision, may be empty
    #[serde(rename = "sha1", alias = "revision", default)]
    pub revision: String,

    /// Absolute or archive-relative download locator
    #[serde(rename = "url", alias = "download_url", default)]
    pub download_url: String,
}

impl PluginRecord {
    /// Create a record with only a name and a download locator.
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            version: String::new(),
            revision: String::new(),
            download_url: download_url.into(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the version label.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the source control revision.
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }
}

/// The merged plugin catalog, keyed and ordered by plugin name.
///
/// Serializes as a JSON object from plugin name to record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plugins: BTreeMap<String, PluginRecord>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a record into the catalog.
    ///
    /// A new name is inserted. For a known name the candidate replaces the
    /// incumbent only when its version is strictly newer; ties and
    /// incomparable versions keep the incumbent. Returns whether the
    /// candidate was kept.
    pub fn merge(&mut self, candidate: PluginRecord) -> bool {
        match self.plugins.entry(candidate.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
                true
            }
            Entry::Occupied(mut slot) => {
                if is_newer(&candidate.version, &slot.get().version) {
                    tracing::debug!(
                        plugin = %candidate.name,
                        from = %slot.get().version,
                        to = %candidate.version,
                        "Newer plugin version replaces catalog entry"
                    );
                    slot.insert(candidate);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Merge every record of a batch, in order.
    pub fn merge_all(&mut self, records: impl IntoIterator<Item = PluginRecord>) {
        for record in records {
            self.merge(record);
        }
    }

    /// Look up a plugin by name.
    pub fn get(&self, name: &str) -> Option<&PluginRecord> {
        self.plugins.get(name)
    }

    /// Number of plugins in the catalog.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Iterate over the records in name order.
    pub fn iter(&self) -> btree_map::Values<'_, String, PluginRecord> {
        self.plugins.values()
    }

    /// Plugin names in order.
    pub fn names(&self) -> Vec<&str> {
        self.plugins.keys().map(String::as_str).collect()
    }

    /// Consume the catalog into a name-ordered list.
    pub fn into_records(self) -> Vec<PluginRecord> {
        self.plugins.into_values().collect()
    }
}

impl FromIterator<PluginRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = PluginRecord>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.merge_all(iter);
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PluginRecord;
    type IntoIter = btree_map::Values<'a, String, PluginRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
