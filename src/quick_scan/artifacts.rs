//! Quick-win detection for disposable build artifact folders.

use crate::fs_utils::dir_size;
use crate::quick_scan::result::QuickWin;
use std::path::Path;

/// Category attached to every artifact quick win.
pub const BUILD_ARTIFACTS_CATEGORY: &str = "Build Artifacts";

/// Folder names (lowercase) that hold regenerable output.
pub const ARTIFACT_DIR_NAMES: &[&str] = &[
    "node_modules",
    "build",
    "dist",
    "bin",
    "obj",
    "__pycache__",
    ".vs",
    "target",
];

/// Artifact folders at or below this size are not reported.
pub const QUICK_WIN_MIN_SIZE: u64 = 1024 * 1024;

/// Returns the matched artifact name for `dir`, compared case-insensitively.
pub fn artifact_name(dir: &Path) -> Option<&'static str> {
    let name = dir.file_name()?.to_string_lossy().to_lowercase();
    ARTIFACT_DIR_NAMES.iter().copied().find(|a| *a == name)
}

/// Build a quick win for an artifact folder of the given size.
pub fn quick_win_for(dir: &Path, size: u64) -> Option<QuickWin> {
    let matched = artifact_name(dir)?;
    if size <= QUICK_WIN_MIN_SIZE {
        return None;
    }

    Some(QuickWin {
        category: BUILD_ARTIFACTS_CATEGORY.to_string(),
        path: dir.to_path_buf(),
        size,
        reason: format!("{matched} directory"),
    })
}

/// Check `dir` for a quick win, measuring it only if the name matches.
pub fn check_quick_win(dir: &Path) -> Option<QuickWin> {
    artifact_name(dir)?;
    quick_win_for(dir, dir_size(dir))
}
