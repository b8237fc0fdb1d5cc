//! Bundled archive plugin source.
//!
//! Host distributions ship their core plugins as nested JARs under
//! `WEB-INF/plugins/` inside the distribution archive. Each nested JAR
//! declares its name and version in the main section of its manifest.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use zip::result::ZipError;
use zip::ZipArchive;

use super::{CorePluginDescriptions, PluginSource, SourceError, SourceResult};
use crate::core::PluginRecord;

/// Directory of the distribution archive holding bundled plugins.
pub const PLUGINS_DIR: &str = "WEB-INF/plugins";

/// Location of the manifest inside a plugin JAR.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

// Manifest attribute names are case-insensitive; keys are stored lowercased.
const PLUGIN_NAME_ATTRIBUTE: &str = "gerrit-pluginname";
const VERSION_ATTRIBUTE: &str = "implementation-version";

/// Lists the plugins bundled in the running host's distribution archive.
#[derive(Debug, Clone)]
pub struct ArchiveSource {
    /// Version of the host that owns the archive
    running_version: String,

    /// Distribution archive, absent on non-archive deployments
    archive: Option<PathBuf>,

    descriptions: CorePluginDescriptions,
}

impl ArchiveSource {
    /// Create a source for the archive of the host running `running_version`.
    pub fn new(running_version: impl Into<String>, archive: Option<PathBuf>) -> Self {
        Self { running_version: running_version.into(), archive, descriptions: CorePluginDescriptions }
    }
}

#[async_trait]
impl PluginSource for ArchiveSource {
    fn name(&self) -> &str {
        "archive"
    }

    async fn list(&self, host_version: &str) -> SourceResult<Vec<PluginRecord>> {
        // Only the running host's own archive can be inspected.
        if host_version != self.running_version {
            tracing::warn!(
                host_version,
                running_version = %self.running_version,
                "No core plugins available for a version different from the running host"
            );
            return Ok(Vec::new());
        }

        let Some(archive) = self.archive.clone() else {
            tracing::warn!("Core plugins not available on non-archive distributions");
            return Ok(Vec::new());
        };

        let descriptions = self.descriptions;
        tokio::task::spawn_blocking(move || scan_archive(&archive, descriptions))
            .await
            .map_err(|e| SourceError::Task(e.to_string()))?
    }
}

/// Read every bundled plugin of a distribution archive, sorted by name.
fn scan_archive(path: &Path, descriptions: CorePluginDescriptions) -> SourceResult<Vec<PluginRecord>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    let mut plugins = Vec::new();

    for index in 0..archive.len() {
        let mut entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::error!(archive = %path.display(), index, error = %e, "Unreadable archive entry");
                continue;
            }
        };

        let entry_name = entry.name().to_string();
        if entry.is_dir() || !is_plugin_entry(&entry_name) {
            continue;
        }

        let url = format!("jar:file:{}!/{}", path.display(), entry_name);
        let mut bytes = Vec::new();
        if let Err(e) = entry.read_to_end(&mut bytes) {
            tracing::error!(plugin = %url, error = %e, "Unable to open plugin");
            continue;
        }

        match read_manifest(bytes) {
            Ok(manifest) => plugins.push(plugin_record(&entry_name, url, manifest, descriptions)),
            Err(e) => tracing::error!(plugin = %url, error = %e, "Unable to open plugin"),
        }
    }

    plugins.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(archive = %path.display(), count = plugins.len(), "Scanned bundled plugins");
    Ok(plugins)
}

fn is_plugin_entry(entry_name: &str) -> bool {
    entry_name
        .strip_prefix(PLUGINS_DIR)
        .is_some_and(|rest| rest.starts_with('/') && rest.ends_with(".jar"))
}

/// Main manifest attributes of a plugin JAR, `None` when it has no manifest.
fn read_manifest(jar: Vec<u8>) -> SourceResult<Option<HashMap<String, String>>> {
    let mut jar = ZipArchive::new(Cursor::new(jar))?;
    let mut manifest = match jar.by_name(MANIFEST_PATH) {
        Ok(manifest) => manifest,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut content = String::new();
    manifest.read_to_string(&mut content)?;
    Ok(Some(parse_manifest(&content)))
}

/// Parse the main section of a JAR manifest, keyed by lowercased name.
///
/// Lines starting with a single space continue the previous value.
fn parse_manifest(content: &str) -> HashMap<String, String> {
    let mut attributes: HashMap<String, String> = HashMap::new();
    let mut last_key: Option<String> = None;

    for line in content.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            break;
        }

        if let Some(continuation) = line.strip_prefix(' ') {
            if let Some(value) = last_key.as_ref().and_then(|key| attributes.get_mut(key)) {
                value.push_str(continuation);
            }
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            let value = value.strip_prefix(' ').unwrap_or(value);
            let key = key.trim().to_ascii_lowercase();
            attributes.insert(key.clone(), value.to_string());
            last_key = Some(key);
        }
    }

    attributes
}

fn plugin_record(
    entry_name: &str,
    url: String,
    manifest: Option<HashMap<String, String>>,
    descriptions: CorePluginDescriptions,
) -> PluginRecord {
    let manifest = manifest.unwrap_or_default();

    match manifest.get(PLUGIN_NAME_ATTRIBUTE).filter(|name| !name.is_empty()) {
        Some(name) => PluginRecord::new(name.clone(), url)
            .with_description(descriptions.get(name).unwrap_or_default())
            .with_version(manifest.get(VERSION_ATTRIBUTE).cloned().unwrap_or_default()),
        None => PluginRecord::new(file_stem(entry_name), url),
    }
}

fn file_stem(entry_name: &str) -> String {
    Path::new(entry_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| entry_name.to_string())
}
