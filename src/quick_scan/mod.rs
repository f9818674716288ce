//! Quick scan: a fast overview of the projects under a set of roots.
//!
//! This module provides:
//! - Project classification from indicator files
//! - Quick-win (build artifact) and sensitive filename heuristics
//! - The depth-first walker and the post-scan duplicate grouping

mod artifacts;
mod detector;
pub mod detectors;
mod duplicates;
mod options;
mod progress;
mod registry;
mod result;
mod security;
mod walker;

pub use artifacts::{
    artifact_name, check_quick_win, quick_win_for, ARTIFACT_DIR_NAMES, BUILD_ARTIFACTS_CATEGORY,
    QUICK_WIN_MIN_SIZE,
};
pub use detector::{DirListing, ProjectDetector, VCS_MARKER};
pub use detectors::all_detectors;
pub use duplicates::{find_duplicates, normalize_name, DUPLICATE_MARKERS};
pub use options::{InterruptPolicy, ScanOptions, DEFAULT_MAX_DEPTH};
pub use progress::{BarProgress, NoProgress, ProgressCounter, ScanProgress};
pub use registry::{DetectorRegistry, UNKNOWN_LABEL};
pub use result::{DuplicatePair, ProjectSummary, QuickWin, ScanResult, SecurityFinding};
pub use security::{matching_patterns, scan_files, MultiMatch, SENSITIVE_PATTERNS};
pub use walker::QuickScanner;
