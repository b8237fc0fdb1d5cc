//! Host version to CI branch resolution.
//!
//! The CI server groups plugin jobs in one view per host release branch
//! (`Plugins-stable-3.0`, `Plugins-master`, ...). This module maps the
//! running host's version string onto that branch name.

use once_cell::sync::Lazy;
use regex::Regex;

/// Branch used for unknown, malformed, or unreleased development versions.
pub const MASTER_BRANCH: &str = "master";

/// Prefix of the CI view that lists the plugin jobs of one branch.
pub const VIEW_PREFIX: &str = "Plugins-";

/// Suffixes allowed after the patch number of a version on a stable branch:
/// - `rc3` release candidates
/// - `17-gc8b633d5ce` builds described from a release tag
/// - `RP-...` internal rebuilds of a release
static STABLE_PATCH_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:rc\d+|\d+-g[0-9a-fA-F]+|RP-.*)$").expect("stable patch suffix pattern")
});

/// Resolve the CI branch for a host version.
///
/// Total over all inputs: anything that is not recognizably a release or a
/// build of a release resolves to [`MASTER_BRANCH`].
///
/// ```
/// use plugin_manager::core::branch_for;
///
/// assert_eq!(branch_for("2.16.10"), "stable-2.16");
/// assert_eq!(branch_for("3.0.0-rc2-237-gae0124c68e"), "master");
/// assert_eq!(branch_for(None), "master");
/// ```
pub fn branch_for<'a>(version: impl Into<Option<&'a str>>) -> String {
    let Some(version) = version.into().map(str::trim) else {
        return MASTER_BRANCH.to_string();
    };

    let mut parts = version.split('.');
    let major = parts.next().unwrap_or_default();
    let minor = match parts.next() {
        Some(minor) => minor.split('-').next().unwrap_or_default(),
        None => return MASTER_BRANCH.to_string(),
    };

    if !is_number(major) || !is_number(minor) {
        return MASTER_BRANCH.to_string();
    }

    if let Some(patch) = parts.next() {
        if let Some((_, suffix)) = patch.split_once('-') {
            if !STABLE_PATCH_SUFFIX.is_match(suffix) {
                return MASTER_BRANCH.to_string();
            }
        }
    }

    format!("stable-{major}.{minor}")
}

fn is_number(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Name of the CI view holding the plugin jobs for a host version.
pub fn view_name<'a>(version: impl Into<Option<&'a str>>) -> String {
    format!("{VIEW_PREFIX}{}", branch_for(version))
}
