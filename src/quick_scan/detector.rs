//! Core trait and types for project classification.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Marker that makes a directory a project even without indicator files.
pub const VCS_MARKER: &str = ".git";

/// Immediate (non-recursive) contents of a directory.
#[derive(Debug, Clone, Default)]
pub struct DirListing {
    /// Names of regular files directly inside the directory, sorted.
    pub files: Vec<String>,
    /// Paths of direct subdirectories, sorted.
    pub subdirs: Vec<PathBuf>,
    /// Whether a version-control marker is present.
    pub has_vcs: bool,
}

impl DirListing {
    /// List `dir` without descending into it.
    ///
    /// Entries that cannot be inspected are dropped. Symlinks are
    /// classified by what they point to.
    pub fn read(dir: &Path) -> io::Result<Self> {
        let mut listing = DirListing::default();

        for entry in fs::read_dir(dir)?.flatten() {
            let path = entry.path();
            if path.is_dir() {
                listing.subdirs.push(path);
            } else if path.is_file() {
                listing
                    .files
                    .push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        listing.files.sort();
        listing.subdirs.sort();
        listing.has_vcs = dir.join(VCS_MARKER).exists();
        Ok(listing)
    }

    /// True if a file named exactly `indicator` is present.
    pub fn has_indicator(&self, indicator: &str) -> bool {
        self.files.iter().any(|f| f == indicator)
    }
}

/// Trait for project type detectors.
///
/// Implement this trait to add a project type. Detectors only look at a
/// directory's direct children.
pub trait ProjectDetector: Send + Sync {
    /// Label reported for matching directories (e.g. "Node.js").
    fn label(&self) -> &'static str;

    /// Files whose presence identifies this project type.
    fn indicator_files(&self) -> &'static [&'static str];

    /// True if any indicator file is present in the listing.
    fn detect(&self, listing: &DirListing) -> bool {
        self.indicator_files()
            .iter()
            .any(|indicator| listing.has_indicator(indicator))
    }
}
