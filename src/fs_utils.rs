//! Best-effort filesystem predicates shared by the scanner.
//!
//! None of these functions fail: unreadable files and directories that
//! vanish mid-walk are skipped and simply do not contribute.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Total byte length of every regular file under `path`.
///
/// Symbolic links are not followed and contribute nothing.
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

/// True when no file exists anywhere below `path`.
///
/// A tree made only of empty subdirectories counts as empty. Any read
/// error makes the answer `false`, so an unreadable folder is never
/// reported as empty.
pub fn is_empty_dir(path: &Path) -> bool {
    for entry in WalkDir::new(path) {
        match entry {
            Ok(e) if e.file_type().is_dir() => continue,
            Ok(_) | Err(_) => return false,
        }
    }
    true
}

/// Recursive file count, optionally limited to names ending in one of
/// `extensions` (e.g. `&[".py", ".rs"]`).
///
/// Links are not followed. A symlink to a file (or a broken link) counts
/// as one file; a symlink to a directory counts as nothing.
pub fn count_files(path: &Path, extensions: Option<&[&str]>) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .flatten()
        .filter(|e| {
            let ft = e.file_type();
            !ft.is_dir() && !(ft.is_symlink() && e.path().is_dir())
        })
        .filter(|e| match extensions {
            None => true,
            Some(exts) => {
                let name = e.file_name().to_string_lossy();
                exts.iter().any(|ext| name.ends_with(ext))
            }
        })
        .count() as u64
}

/// Plain substring test of the path's string form against each pattern.
///
/// This is not glob or component aware: `"/bin"` also excludes `/binaries`.
pub fn should_exclude(path: &Path, patterns: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    patterns.iter().any(|p| path_str.contains(p.as_str()))
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Human-readable size using binary units.
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
