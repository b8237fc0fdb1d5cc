//! Descriptions of the core plugins bundled with the host distribution.
//!
//! Bundled plugin manifests carry a name and a version but no description.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static CORE_PLUGINS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("codemirror-editor", "CodeMirror plugin for polygerrit"),
        (
            "commit-message-length-validator",
            "Plugin to validate that commit messages conform to length limits",
        ),
        ("delete-project", "Provides the ability to delete a project"),
        ("download-commands", "Adds the standard download schemes and commands"),
        ("gitiles", "Plugin running Gitiles alongside a Gerrit server"),
        ("hooks", "Old-style fork+exec hooks"),
        ("plugin-manager", "Adds support for discovering and installing other plugins"),
        ("replication", "Copies to other servers using the Git protocol"),
        ("reviewnotes", "Annotates merged commits using notes on refs/notes/review"),
        ("singleusergroup", "GroupBackend enabling users to be directly added to access rules"),
        ("webhooks", "Allows to propagate Gerrit events to remote http endpoints"),
        ("lfs", "Enables Git Large File Storage integration for Gerrit projects."),
        ("its-base", "Base functionality for interaction with Issue Tracking Systems"),
        (
            "its-jira",
            "Enables links to Jira ITS in comments and publishing Gerrit events as ticket comments.",
        ),
    ])
});

/// Built-in table of core plugin descriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorePluginDescriptions;

impl CorePluginDescriptions {
    /// Description of a core plugin, if it is one.
    pub fn get(&self, plugin: &str) -> Option<&'static str> {
        CORE_PLUGINS.get(plugin).copied()
    }

    /// Names of all known core plugins.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = CORE_PLUGINS.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
