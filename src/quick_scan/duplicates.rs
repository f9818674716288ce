//! Name-based duplicate detection over discovered projects.
//!
//! Two projects are flagged when their directory names agree after
//! lowercasing and removing copy markers such as `-backup` or `-v2`.
//! Contents are never compared, so every pair needs manual review.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::quick_scan::result::{DuplicatePair, ProjectSummary};

/// Markers removed from names before grouping, applied in this order.
pub const DUPLICATE_MARKERS: &[&str] = &["-backup", "-old", "-copy", "-final", "-v2", "-temp"];

/// Lowercase `name` and strip every occurrence of each marker.
///
/// Markers are removed anywhere in the name, not only at the end, so
/// `"app-old-ui"` becomes `"app-ui"`.
pub fn normalize_name(name: &str) -> String {
    DUPLICATE_MARKERS
        .iter()
        .fold(name.to_lowercase(), |acc, marker| acc.replace(marker, ""))
}

/// Pair up every project sharing a normalized name.
///
/// Groups keep first-seen order and a group of `n` yields `n * (n - 1) / 2`
/// pairs.
pub fn find_duplicates(projects: &[ProjectSummary]) -> Vec<DuplicatePair> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<PathBuf>> = Vec::new();

    for project in projects {
        let name = project
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let key = normalize_name(&name);

        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(project.path.clone());
    }

    let mut pairs = Vec::new();
    for paths in groups.iter().filter(|g| g.len() > 1) {
        for (i, first) in paths.iter().enumerate() {
            for second in &paths[i + 1..] {
                pairs.push(DuplicatePair {
                    first: first.clone(),
                    second: second.clone(),
                });
            }
        }
    }
    pairs
}
