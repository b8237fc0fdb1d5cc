//! Version precedence between plugin artifacts.
//!
//! Versions are opaque labels coming from manifests and CI build outputs
//! (`1.2.10`, `3.0.0-rc2`, `v3.4-12-gabc123`), so the ordering is lenient:
//! `-` and `.` both separate segments, numeric segments compare as numbers,
//! everything else compares as text, and a longer version wins when one is
//! a prefix of the other.

use std::cmp::Ordering;

/// Split a version label into comparable segments.
fn segments(version: &str) -> impl Iterator<Item = &str> {
    version.split(['.', '-'])
}

/// Compare two segments numerically when both are numbers, as text otherwise.
fn compare_segment(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Order two version labels.
///
/// Never fails: segments that are not numbers, or numbers too large for
/// `u64`, fall back to lexicographic comparison.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = segments(a);
    let mut right = segments(b);

    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) if l == r => continue,
            (Some(l), Some(r)) => return compare_segment(l, r),
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Whether `candidate` denotes a later version than `current`.
pub fn is_newer(candidate: &str, current: &str) -> bool {
    compare_versions(candidate, current) == Ordering::Greater
}
