//! Jenkins CI plugin source.
//!
//! Plugin jobs for a host release live in a CI view named after the host's
//! branch (`Plugins-stable-3.5`). For every healthy job the source reads the
//! last successful build and turns its artifacts into a [`PluginRecord`]:
//!
//! ```text
//! view/Plugins-<branch>/api/json      jobs + build color
//!   └─ <job>/api/json                 lastSuccessfulBuild
//!        └─ <build>/api/json          artifacts + built revision
//!             ├─ artifact/<x>.jar           download URL, plugin name
//!             ├─ artifact/<x>.jar-version   version (plain text)
//!             └─ artifact/<x>.json          description
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use parking_lot::Mutex;
use serde::Deserialize;

use super::http::{fetch_json, join_url, HttpFetch};
use super::{PluginSource, SourceResult};
use crate::core::{view_name, CiConfig, PluginRecord, DEFAULT_HEALTHY_COLOR};

/// Suffix of the auxiliary static-resources JAR published next to some plugins.
const STATIC_JAR_SUFFIX: &str = "-static.jar";

/// Suffix of the plain-text artifact holding the plugin version.
const VERSION_SUFFIX: &str = ".jar-version";

/// Suffix of the JSON artifact holding the plugin description.
const DESCRIPTOR_SUFFIX: &str = ".json";

/// Length of the abbreviated revision id.
const REVISION_LENGTH: usize = 8;

#[derive(Debug, Deserialize)]
struct View {
    #[serde(default)]
    jobs: Vec<Job>,
}

#[derive(Debug, Deserialize)]
struct Job {
    name: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobDetails {
    #[serde(default)]
    last_successful_build: Option<BuildRef>,
}

#[derive(Debug, Deserialize)]
struct BuildRef {
    url: String,
}

#[derive(Debug, Deserialize)]
struct Build {
    #[serde(default)]
    artifacts: Vec<Artifact>,
    #[serde(default)]
    actions: Vec<Option<BuildAction>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    relative_path: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildAction {
    #[serde(default)]
    last_built_revision: Option<BuiltRevision>,
}

#[derive(Debug, Deserialize)]
struct BuiltRevision {
    #[serde(rename = "SHA1", default)]
    sha1: String,
}

#[derive(Debug, Deserialize)]
struct PluginDescriptor {
    #[serde(default)]
    description: Option<String>,
}

impl Build {
    /// Abbreviated revision of the first action that reports one.
    fn revision(&self) -> Option<String> {
        self.actions
            .iter()
            .flatten()
            .filter_map(|action| action.last_built_revision.as_ref())
            .find(|revision| !revision.sha1.is_empty())
            .map(|revision| revision.sha1.chars().take(REVISION_LENGTH).collect())
    }

    /// The plugin JAR: the first JAR that is not a static-resources bundle.
    fn plugin_artifact(&self) -> Option<&Artifact> {
        self.artifacts.iter().find(|artifact| {
            artifact.relative_path.ends_with(".jar")
                && !artifact.relative_path.ends_with(STATIC_JAR_SUFFIX)
        })
    }

    fn artifact_with_suffix(&self, suffix: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|artifact| artifact.relative_path.ends_with(suffix))
    }
}

/// Derive a plugin name from the relative path of its JAR.
///
/// - `owners/target/owners-1.2.jar` (Maven layout) gives `owners`
/// - `bazel-bin/plugins/replication/replication.jar` gives `replication`
/// - anything else is the file name without `.jar`
pub fn plugin_name_from_path(relative_path: &str) -> String {
    let mut segments: Vec<&str> = relative_path.split('/').collect();
    let file_name = segments.pop().unwrap_or_default();

    match segments.last().copied() {
        Some("target") => {
            let stem = file_name.rsplit_once('.').map_or(file_name, |(stem, _)| stem);
            stem.split('-').next().unwrap_or_default().to_string()
        }
        Some(parent) if !parent.is_empty() && file_name.starts_with(parent) => parent.to_string(),
        _ => file_name.strip_suffix(".jar").unwrap_or(file_name).to_string(),
    }
}

/// Lists plugins built by a Jenkins CI server.
///
/// A scan runs once per host version; later calls for the same version
/// return the memoized result.
pub struct JenkinsSource {
    /// Base URL of the CI server
    base_url: String,

    /// HTTP collaborator
    http: Arc<dyn HttpFetch>,

    /// Build color of jobs worth inspecting
    healthy_color: String,

    /// Maximum number of jobs resolved concurrently
    max_concurrent_jobs: usize,

    /// Completed scans by host version
    scanned: Mutex<HashMap<String, Vec<PluginRecord>>>,
}

impl std::fmt::Debug for JenkinsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JenkinsSource")
            .field("base_url", &self.base_url)
            .field("healthy_color", &self.healthy_color)
            .field("scanned", &self.scanned.lock().len())
            .finish()
    }
}

impl JenkinsSource {
    /// Create a source for the CI server at `base_url`.
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpFetch>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
            healthy_color: DEFAULT_HEALTHY_COLOR.to_string(),
            max_concurrent_jobs: 8,
            scanned: Mutex::new(HashMap::new()),
        }
    }

    /// Create a source from the `[ci]` configuration section.
    pub fn from_config(config: &CiConfig, http: Arc<dyn HttpFetch>) -> Self {
        Self::new(config.url.clone(), http)
            .with_healthy_color(config.healthy_color.clone())
            .with_max_concurrent_jobs(config.max_concurrent_jobs)
    }

    /// Set the build color of jobs worth inspecting.
    pub fn with_healthy_color(mut self, color: impl Into<String>) -> Self {
        self.healthy_color = color.into();
        self
    }

    /// Set how many jobs are resolved concurrently.
    pub fn with_max_concurrent_jobs(mut self, jobs: usize) -> Self {
        self.max_concurrent_jobs = jobs.max(1);
        self
    }

    fn view_url(&self, host_version: &str) -> String {
        let view = view_name(host_version);
        join_url(&self.base_url, &format!("view/{}/api/json", urlencoding::encode(&view)))
    }

    async fn scan(&self, host_version: &str) -> SourceResult<Vec<PluginRecord>> {
        let url = self.view_url(host_version);
        tracing::info!(host_version, view = %url, "Scanning CI plugin view");

        let view: View = match fetch_json(self.http.as_ref(), &url).await {
            Ok(view) => view,
            Err(e) if e.is_not_found() => {
                tracing::warn!(host_version, view = %url, "No plugins available for host version");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let healthy: Vec<(String, String)> = view
            .jobs
            .into_iter()
            .filter(|job| job.color.as_deref() == Some(self.healthy_color.as_str()))
            .filter_map(|job| match job.url {
                Some(url) => Some((job.name, url)),
                None => {
                    tracing::warn!(job = %job.name, "Job has no URL");
                    None
                }
            })
            .collect();

        let mut plugins: Vec<PluginRecord> = stream::iter(healthy)
            .map(|(name, url)| self.resolve_job(name, url))
            .buffered(self.max_concurrent_jobs)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .flatten()
            .collect();

        plugins.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::info!(host_version, count = plugins.len(), "CI plugin scan complete");
        Ok(plugins)
    }

    /// Resolve one job, isolating its failures from the rest of the scan.
    async fn resolve_job(&self, name: String, url: String) -> Option<PluginRecord> {
        match self.plugin_for_job(&url).await {
            Ok(Some(plugin)) => Some(plugin),
            Ok(None) => {
                tracing::debug!(job = %name, "Job has no publishable plugin build");
                None
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!(job = %name, error = %e, "Plugin artifact info not found");
                None
            }
            Err(e) => {
                tracing::error!(job = %name, error = %e, "Cannot retrieve plugin artifact info");
                None
            }
        }
    }

    async fn plugin_for_job(&self, job_url: &str) -> SourceResult<Option<PluginRecord>> {
        let details: JobDetails = fetch_json(self.http.as_ref(), &join_url(job_url, "api/json")).await?;

        match details.last_successful_build {
            Some(build) => self.plugin_for_build(&build.url).await,
            None => Ok(None),
        }
    }

    async fn plugin_for_build(&self, build_url: &str) -> SourceResult<Option<PluginRecord>> {
        let build: Build = fetch_json(self.http.as_ref(), &join_url(build_url, "api/json")).await?;

        let Some(jar) = build.plugin_artifact() else {
            return Ok(None);
        };

        let name = plugin_name_from_path(&jar.relative_path);
        if name.is_empty() {
            tracing::warn!(build = build_url, artifact = %jar.relative_path, "Cannot name plugin artifact");
            return Ok(None);
        }

        let Some(revision) = build.revision() else {
            tracing::debug!(build = build_url, plugin = %name, "Build has no source revision");
            return Ok(None);
        };

        let version = match build.artifact_with_suffix(VERSION_SUFFIX) {
            Some(artifact) => {
                let url = artifact_url(build_url, &artifact.relative_path);
                self.http.get_text(&url).await?.trim().to_string()
            }
            None => String::new(),
        };

        let description = match build.artifact_with_suffix(DESCRIPTOR_SUFFIX) {
            Some(artifact) => {
                let url = artifact_url(build_url, &artifact.relative_path);
                fetch_json::<PluginDescriptor>(self.http.as_ref(), &url).await?.description.unwrap_or_default()
            }
            None => String::new(),
        };

        Ok(Some(
            PluginRecord::new(name, artifact_url(build_url, &jar.relative_path))
                .with_description(description)
                .with_version(version)
                .with_revision(revision),
        ))
    }
}

fn artifact_url(build_url: &str, relative_path: &str) -> String {
    join_url(build_url, &format!("artifact/{relative_path}"))
}

#[async_trait]
impl PluginSource for JenkinsSource {
    fn name(&self) -> &str {
        "jenkins"
    }

    async fn list(&self, host_version: &str) -> SourceResult<Vec<PluginRecord>> {
        let memoized = self.scanned.lock().get(host_version).cloned();
        if let Some(plugins) = memoized {
            tracing::debug!(host_version, count = plugins.len(), "Using memoized CI scan");
            return Ok(plugins);
        }

        let plugins = self.scan(host_version).await?;
        self.scanned.lock().insert(host_version.to_string(), plugins.clone());
        Ok(plugins)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::source::SourceError;

    const CI: &str = "https://ci.example.com";
    const VIEW: &str = "https://ci.example.com/view/Plugins-stable-3.5/api/json";

    /// Canned CI server: unknown URLs answer 404.
    #[derive(Default)]
    struct StubCi {
        responses: HashMap<String, String>,
        failures: HashMap<String, u16>,
        calls: AtomicUsize,
    }

    impl StubCi {
        fn respond(mut self, url: &str, body: &str) -> Self {
            self.responses.insert(url.to_string(), body.to_string());
            self
        }

        fn fail(mut self, url: &str, status: u16) -> Self {
            self.failures.insert(url.to_string(), status);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HttpFetch for StubCi {
        async fn get_text(&self, url: &str) -> SourceResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(status) = self.failures.get(url) {
                return Err(SourceError::Api { status: *status, message: "stub failure".into() });
            }
            self.responses.get(url).cloned().ok_or_else(|| SourceError::NotFound(url.to_string()))
        }
    }

    fn job(name: &str, color: &str) -> String {
        format!(r#"{{"name": "{name}", "url": "{CI}/job/{name}/", "color": "{color}"}}"#)
    }

    fn view(jobs: &[String]) -> String {
        format!(r#"{{"name": "Plugins-stable-3.5", "jobs": [{}]}}"#, jobs.join(","))
    }

    fn job_details(name: &str, build: u32) -> String {
        format!(r#"{{"name": "{name}", "lastSuccessfulBuild": {{"number": {build}, "url": "{CI}/job/{name}/{build}/"}}}}"#)
    }

    fn build_json(artifacts: &[&str], sha1: Option<&str>) -> String {
        let artifacts: Vec<String> = artifacts
            .iter()
            .map(|path| {
                let file = path.rsplit('/').next().unwrap();
                format!(r#"{{"displayPath": "{file}", "fileName": "{file}", "relativePath": "{path}"}}"#)
            })
            .collect();
        let revision = sha1
            .map(|sha1| format!(r#", {{"lastBuiltRevision": {{"SHA1": "{sha1}", "branch": []}}}}"#))
            .unwrap_or_default();
        format!(
            r#"{{"artifacts": [{}], "actions": [{{"_class": "hudson.model.CauseAction"}}, {{}}, null{revision}]}}"#,
            artifacts.join(",")
        )
    }

    fn ci_with_plugins() -> StubCi {
        StubCi::default()
            .respond(
                VIEW,
                &view(&[
                    job("plugin-replication-bazel-stable-3.5", "blue"),
                    job("plugin-javamelody-mvn-stable-3.5", "blue"),
                    job("plugin-red-bazel-stable-3.5", "red"),
                    job("plugin-flaky-bazel-stable-3.5", "blue"),
                    job("plugin-unbuilt-bazel-stable-3.5", "blue"),
                    job("plugin-norev-bazel-stable-3.5", "blue"),
                    job("plugin-empty-bazel-stable-3.5", "blue"),
                ]),
            )
            .respond(
                &format!("{CI}/job/plugin-replication-bazel-stable-3.5/api/json"),
                &job_details("plugin-replication-bazel-stable-3.5", 42),
            )
            .respond(
                &format!("{CI}/job/plugin-replication-bazel-stable-3.5/42/api/json"),
                &build_json(
                    &[
                        "bazel-bin/plugins/replication/replication.jar",
                        "bazel-bin/plugins/replication/replication.jar-version",
                        "bazel-bin/plugins/replication/replication.json",
                    ],
                    Some("ae0124c68e7f3a2b"),
                ),
            )
            .respond(
                &format!("{CI}/job/plugin-replication-bazel-stable-3.5/42/artifact/bazel-bin/plugins/replication/replication.jar-version"),
                "v3.5.1-4-gae0124c68e\n",
            )
            .respond(
                &format!("{CI}/job/plugin-replication-bazel-stable-3.5/42/artifact/bazel-bin/plugins/replication/replication.json"),
                r#"{"name": "replication", "description": "Copies to other servers using the Git protocol"}"#,
            )
            .respond(
                &format!("{CI}/job/plugin-javamelody-mvn-stable-3.5/api/json"),
                &job_details("plugin-javamelody-mvn-stable-3.5", 7),
            )
            .respond(
                &format!("{CI}/job/plugin-javamelody-mvn-stable-3.5/7/api/json"),
                &build_json(&["javamelody-static.jar", "target/javamelody-1.99.jar"], Some("0123abcd")),
            )
            .fail(&format!("{CI}/job/plugin-flaky-bazel-stable-3.5/api/json"), 500)
            .respond(
                &format!("{CI}/job/plugin-unbuilt-bazel-stable-3.5/api/json"),
                r#"{"name": "plugin-unbuilt-bazel-stable-3.5", "lastSuccessfulBuild": null}"#,
            )
            .respond(
                &format!("{CI}/job/plugin-norev-bazel-stable-3.5/api/json"),
                &job_details("plugin-norev-bazel-stable-3.5", 3),
            )
            .respond(
                &format!("{CI}/job/plugin-norev-bazel-stable-3.5/3/api/json"),
                &build_json(&["bazel-bin/plugins/norev/norev.jar"], None),
            )
            .respond(
                &format!("{CI}/job/plugin-empty-bazel-stable-3.5/api/json"),
                &job_details("plugin-empty-bazel-stable-3.5", 1),
            )
            .respond(&format!("{CI}/job/plugin-empty-bazel-stable-3.5/1/api/json"), &build_json(&[], Some("ffff0000")))
    }

    #[tokio::test]
    async fn test_lists_healthy_jobs_with_published_plugins() {
        let source = JenkinsSource::new(CI, Arc::new(ci_with_plugins()));
        let plugins = source.list("3.5.1").await.unwrap();

        let names: Vec<_> = plugins.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["javamelody", "replication"]);

        let javamelody = &plugins[0];
        assert_eq!(javamelody.revision, "0123abcd");
        assert!(javamelody.version.is_empty());
        assert!(javamelody.description.is_empty());
        assert_eq!(
            javamelody.download_url,
            format!("{CI}/job/plugin-javamelody-mvn-stable-3.5/7/artifact/target/javamelody-1.99.jar")
        );

        let replication = &plugins[1];
        assert_eq!(replication.version, "v3.5.1-4-gae0124c68e");
        assert_eq!(replication.revision, "ae0124c6");
        assert_eq!(replication.description, "Copies to other servers using the Git protocol");
        assert_eq!(
            replication.download_url,
            format!("{CI}/job/plugin-replication-bazel-stable-3.5/42/artifact/bazel-bin/plugins/replication/replication.jar")
        );
    }

    #[tokio::test]
    async fn test_unhealthy_jobs_are_not_fetched() {
        let ci = Arc::new(
            StubCi::default().respond(VIEW, &view(&[job("a", "red"), job("b", "yellow"), job("c", "notbuilt")])),
        );
        let source = JenkinsSource::new(CI, ci.clone());

        assert!(source.list("3.5.1").await.unwrap().is_empty());
        assert_eq!(ci.calls(), 1);
    }

    #[tokio::test]
    async fn test_scan_is_memoized_per_host_version() {
        let ci = Arc::new(ci_with_plugins());
        let source = JenkinsSource::new(CI, ci.clone());

        let first = source.list("3.5.1").await.unwrap();
        let calls = ci.calls();
        let second = source.list("3.5.1").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(ci.calls(), calls);

        // 3.5.0 maps to the same view but is a distinct host version.
        source.list("3.5.0").await.unwrap();
        assert!(ci.calls() > calls);
    }

    #[tokio::test]
    async fn test_missing_view_is_empty() {
        let source = JenkinsSource::new(CI, Arc::new(StubCi::default()));
        assert!(source.list("3.5.1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_view_is_an_error() {
        let source = JenkinsSource::new(CI, Arc::new(StubCi::default().fail(VIEW, 503)));
        let err = source.list("3.5.1").await.unwrap_err();
        assert!(matches!(err, SourceError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_failed_scan_is_not_memoized() {
        let ci = Arc::new(StubCi::default().fail(VIEW, 503));
        let source = JenkinsSource::new(CI, ci.clone());

        assert!(source.list("3.5.1").await.is_err());
        assert!(source.list("3.5.1").await.is_err());
        assert_eq!(ci.calls(), 2);
    }

    #[tokio::test]
    async fn test_unknown_host_version_uses_master_view() {
        let ci = StubCi::default().respond(&format!("{CI}/view/Plugins-master/api/json"), &view(&[]));
        let source = JenkinsSource::new(format!("{CI}/"), Arc::new(ci));
        assert!(source.list("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_custom_healthy_color() {
        let ci = StubCi::default()
            .respond(VIEW, &view(&[job("plugin-x", "blue_anime")]))
            .respond(&format!("{CI}/job/plugin-x/api/json"), &job_details("plugin-x", 2))
            .respond(&format!("{CI}/job/plugin-x/2/api/json"), &build_json(&["x.jar"], Some("12345678")));
        let source = JenkinsSource::new(CI, Arc::new(ci)).with_healthy_color("blue_anime");

        let plugins = source.list("3.5.1").await.unwrap();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].name, "x");
    }

    #[tokio::test]
    async fn test_bad_version_artifact_drops_only_that_job() {
        let ci = StubCi::default()
            .respond(VIEW, &view(&[job("plugin-x", "blue"), job("plugin-y", "blue"), job("plugin-z", "blue")]))
            .respond(&format!("{CI}/job/plugin-x/api/json"), &job_details("plugin-x", 1))
            .respond(&format!("{CI}/job/plugin-x/1/api/json"), &build_json(&["x/x.jar", "x/x.jar-version"], Some("aaaaaaaa")))
            .respond(&format!("{CI}/job/plugin-y/api/json"), &job_details("plugin-y", 1))
            .respond(&format!("{CI}/job/plugin-y/1/api/json"), &build_json(&["y/y.jar", "y/y.json"], Some("bbbbbbbb")))
            .respond(&format!("{CI}/job/plugin-y/1/artifact/y/y.json"), "{not json")
            .respond(&format!("{CI}/job/plugin-z/api/json"), &job_details("plugin-z", 1))
            .respond(&format!("{CI}/job/plugin-z/1/api/json"), &build_json(&["z/z.jar"], Some("cccccccc")));
        let source = JenkinsSource::new(CI, Arc::new(ci));

        // x.jar-version is missing (404) and y.json is malformed.
        let plugins = source.list("3.5.1").await.unwrap();
        let names: Vec<_> = plugins.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["z"]);
        assert_eq!(plugins[0].revision, "cccccccc");
    }

    #[tokio::test]
    async fn test_job_without_url_is_skipped() {
        let ci = StubCi::default()
            .respond(
                VIEW,
                &view(&[r#"{"name": "plugin-orphan", "color": "blue"}"#.to_string(), job("plugin-z", "blue")]),
            )
            .respond(&format!("{CI}/job/plugin-z/api/json"), &job_details("plugin-z", 1))
            .respond(&format!("{CI}/job/plugin-z/1/api/json"), &build_json(&["z/z.jar"], Some("cccccccc")));
        let source = JenkinsSource::new(CI, Arc::new(ci));

        let plugins = source.list("3.5.1").await.unwrap();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].name, "z");
    }

    #[tokio::test]
    async fn test_unnamed_maven_artifact_is_skipped() {
        let ci = StubCi::default()
            .respond(VIEW, &view(&[job("plugin-anon", "blue")]))
            .respond(&format!("{CI}/job/plugin-anon/api/json"), &job_details("plugin-anon", 1))
            .respond(&format!("{CI}/job/plugin-anon/1/api/json"), &build_json(&["target/-1.0.jar"], Some("dddddddd")));
        let source = JenkinsSource::new(CI, Arc::new(ci));

        assert!(source.list("3.5.1").await.unwrap().is_empty());
    }

    #[test]
    fn test_maven_artifact_names() {
        assert_eq!(plugin_name_from_path("target/javamelody-1.99.jar"), "javamelody");
        assert_eq!(plugin_name_from_path("owners/target/owners-1.2-SNAPSHOT.jar"), "owners");
        assert_eq!(plugin_name_from_path("target/oauth.jar"), "oauth");
        assert_eq!(plugin_name_from_path("target/-1.0.jar"), "");
    }

    #[test]
    fn test_directory_prefixed_artifact_names() {
        assert_eq!(plugin_name_from_path("bazel-bin/plugins/replication/replication.jar"), "replication");
        assert_eq!(plugin_name_from_path("bazel-bin/plugins/its-jira/its-jira-3.5.jar"), "its-jira");
    }

    #[test]
    fn test_fallback_artifact_names() {
        assert_eq!(plugin_name_from_path("bazel-bin/owners-autoassign.jar"), "owners-autoassign");
        assert_eq!(plugin_name_from_path("oauth.jar"), "oauth");
        assert_eq!(plugin_name_from_path("/oauth.jar"), "oauth");
        assert_eq!(plugin_name_from_path("plugins/x/other-name.jar"), "other-name");
    }

    #[test]
    fn test_revision_is_abbreviated() {
        let build: Build = serde_json::from_str(&build_json(&["x.jar"], Some("ae0124c68e7f"))).unwrap();
        assert_eq!(build.revision().as_deref(), Some("ae0124c6"));

        let build: Build = serde_json::from_str(&build_json(&["x.jar"], Some("abc"))).unwrap();
        assert_eq!(build.revision().as_deref(), Some("abc"));
    }

    #[test]
    fn test_static_jar_is_never_the_plugin() {
        let build: Build =
            serde_json::from_str(&build_json(&["x-static.jar", "x.jar-version", "x.jar"], None)).unwrap();
        assert_eq!(build.plugin_artifact().map(|a| a.relative_path.as_str()), Some("x.jar"));

        let build: Build = serde_json::from_str(&build_json(&["x-static.jar"], None)).unwrap();
        assert!(build.plugin_artifact().is_none());
    }
}
