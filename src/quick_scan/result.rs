//! Findings collected by a quick scan.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A directory recognised as the root of a software project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    pub path: PathBuf,
    /// Type label, e.g. "Python" or "Unknown".
    pub project_type: String,
    /// Total bytes of regular files under the project.
    pub size: u64,
    pub last_modified: DateTime<Local>,
    pub file_count: u64,
    pub has_git: bool,
}

/// Disk space that can be reclaimed safely.
#[derive(Debug, Clone, Serialize)]
pub struct QuickWin {
    pub category: String,
    pub path: PathBuf,
    pub size: u64,
    pub reason: String,
}

/// A filename that looks like an exposed key or credential.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityFinding {
    pub path: PathBuf,
    pub issue: String,
}

/// Two projects whose normalized names coincide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicatePair {
    pub first: PathBuf,
    pub second: PathBuf,
}

impl DuplicatePair {
    pub fn contains(&self, path: &Path) -> bool {
        self.first == path || self.second == path
    }
}

/// Everything a quick scan found.
///
/// `total_projects` and `total_size` are derived from `projects` by
/// [`ScanResult::calculate_totals`] and are never updated on their own.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    pub projects_by_type: BTreeMap<String, usize>,
    pub total_projects: usize,
    pub total_size: u64,
    pub duplicates: Vec<DuplicatePair>,
    pub quick_wins: Vec<QuickWin>,
    pub security_findings: Vec<SecurityFinding>,
    pub empty_folders: Vec<PathBuf>,
    pub projects: Vec<ProjectSummary>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a project and bump its per-type counter.
    pub fn record_project(&mut self, project: ProjectSummary) {
        *self
            .projects_by_type
            .entry(project.project_type.clone())
            .or_insert(0) += 1;
        self.projects.push(project);
    }

    /// Recompute the totals from the project list.
    pub fn calculate_totals(&mut self) {
        self.total_projects = self.projects.len();
        self.total_size = self.projects.iter().map(|p| p.size).sum();
    }

    /// Bytes reclaimable through quick wins.
    pub fn quick_win_size(&self) -> u64 {
        self.quick_wins.iter().map(|q| q.size).sum()
    }

    pub fn project_paths(&self) -> impl Iterator<Item = &Path> {
        self.projects.iter().map(|p| p.path.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(path: &str, kind: &str, size: u64) -> ProjectSummary {
        ProjectSummary {
            path: PathBuf::from(path),
            project_type: kind.to_string(),
            size,
            last_modified: Local::now(),
            file_count: 1,
            has_git: false,
        }
    }

    #[test]
    fn test_record_project_counts_by_type() {
        let mut result = ScanResult::new();
        result.record_project(project("/a", "Python", 10));
        result.record_project(project("/b", "Python", 20));
        result.record_project(project("/c", "Node.js", 5));

        assert_eq!(result.projects_by_type["Python"], 2);
        assert_eq!(result.projects_by_type["Node.js"], 1);
        assert_eq!(result.projects.len(), 3);
    }

    #[test]
    fn test_totals_match_project_list() {
        let mut result = ScanResult::new();
        result.record_project(project("/a", "Python", 10));
        result.record_project(project("/b", "Docker", 32));
        result.calculate_totals();

        assert_eq!(result.total_projects, 2);
        assert_eq!(result.total_size, 42);

        // Recomputing is idempotent.
        result.calculate_totals();
        assert_eq!(result.total_size, 42);
    }

    #[test]
    fn test_empty_result_totals() {
        let mut result = ScanResult::new();
        result.calculate_totals();

        assert_eq!(result.total_projects, 0);
        assert_eq!(result.total_size, 0);
        assert_eq!(result.quick_win_size(), 0);
    }

    #[test]
    fn test_duplicate_pair_contains() {
        let pair = DuplicatePair {
            first: PathBuf::from("/x/foo"),
            second: PathBuf::from("/y/foo-old"),
        };
        assert!(pair.contains(Path::new("/x/foo")));
        assert!(pair.contains(Path::new("/y/foo-old")));
        assert!(!pair.contains(Path::new("/z")));
    }

    #[test]
    fn test_result_serializes_to_json() {
        let mut result = ScanResult::new();
        result.record_project(project("/a", "Python", 10));
        result.calculate_totals();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total_projects"], 1);
        assert_eq!(json["projects"][0]["project_type"], "Python");
        assert!(json["projects_by_type"].is_object());
    }
}
