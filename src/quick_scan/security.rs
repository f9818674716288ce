//! Filename heuristics for exposed keys and credentials.
//!
//! This is a name check only; file contents are never read.

use crate::quick_scan::result::SecurityFinding;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lowercase fragments that mark a filename as sensitive.
pub const SENSITIVE_PATTERNS: &[&str] = &[
    "id_rsa",
    "id_dsa",
    ".pem",
    ".key",
    "credentials.json",
    "secrets.json",
    ".env",
];

/// How many findings a single file can produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiMatch {
    /// One finding per matching pattern.
    #[default]
    All,
    /// Stop at the first matching pattern.
    First,
}

/// Patterns contained in `file_name`, lowercased before matching.
pub fn matching_patterns(file_name: &str, mode: MultiMatch) -> Vec<&'static str> {
    let name = file_name.to_lowercase();
    let matches = SENSITIVE_PATTERNS.iter().copied().filter(|p| name.contains(p));
    match mode {
        MultiMatch::All => matches.collect(),
        MultiMatch::First => matches.take(1).collect(),
    }
}

/// Check the immediate files of `dir`.
pub fn scan_files<S: AsRef<str>>(dir: &Path, files: &[S], mode: MultiMatch) -> Vec<SecurityFinding> {
    files
        .iter()
        .flat_map(|file| {
            let file = file.as_ref();
            matching_patterns(file, mode)
                .into_iter()
                .map(move |pattern| SecurityFinding {
                    path: dir.join(file),
                    issue: format!("Potential sensitive file: {pattern}"),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_key_single_finding() {
        let findings = scan_files(Path::new("/home/u/keys"), &["id_rsa"], MultiMatch::All);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].path, Path::new("/home/u/keys/id_rsa"));
        assert_eq!(findings[0].issue, "Potential sensitive file: id_rsa");
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(matching_patterns("Server.PEM", MultiMatch::All), vec![".pem"]);
        assert_eq!(matching_patterns(".ENV.local", MultiMatch::All), vec![".env"]);
    }

    #[test]
    fn test_multi_match_modes() {
        // "id_rsa.key" contains both "id_rsa" and ".key".
        assert_eq!(
            matching_patterns("id_rsa.key", MultiMatch::All),
            vec!["id_rsa", ".key"]
        );
        assert_eq!(matching_patterns("id_rsa.key", MultiMatch::First), vec!["id_rsa"]);
    }

    #[test]
    fn test_harmless_files() {
        let files = ["main.rs", "README.md", "keyboard.c"];
        assert!(scan_files(Path::new("/p"), &files, MultiMatch::All).is_empty());
    }

    #[test]
    fn test_one_finding_per_matching_file() {
        let files = vec![
            "credentials.json".to_string(),
            "notes.txt".to_string(),
            "server.pem".to_string(),
        ];
        let findings = scan_files(Path::new("/p"), &files, MultiMatch::First);

        assert_eq!(findings.len(), 2);
        assert!(findings.iter().any(|f| f.path.ends_with("server.pem")));
    }
}
