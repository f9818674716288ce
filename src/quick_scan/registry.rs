//! Ordered registry of project detectors.

use crate::quick_scan::detector::{DirListing, ProjectDetector};
use crate::quick_scan::detectors::all_detectors;

/// Label for version-controlled directories no detector recognises.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Registry holding detectors in the order they are tried.
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn ProjectDetector>>,
}

impl DetectorRegistry {
    /// Create a registry with all built-in detectors.
    pub fn new() -> Self {
        Self {
            detectors: all_detectors(),
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.label()).collect()
    }

    /// Classify a directory from its immediate listing.
    ///
    /// The first matching detector wins. A version-controlled directory
    /// holding at least one file falls back to [`UNKNOWN_LABEL`].
    pub fn classify(&self, listing: &DirListing) -> Option<&'static str> {
        if let Some(detector) = self.detectors.iter().find(|d| d.detect(listing)) {
            return Some(detector.label());
        }

        if listing.has_vcs && !listing.files.is_empty() {
            return Some(UNKNOWN_LABEL);
        }

        None
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DetectorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.labels()).finish()
    }
}
