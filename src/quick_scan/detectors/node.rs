//! Node.js project detector.

use crate::quick_scan::ProjectDetector;

/// Detector for Node.js projects, identified by `package.json`.
pub struct NodeDetector;

impl ProjectDetector for NodeDetector {
    fn label(&self) -> &'static str {
        "Node.js"
    }

    fn indicator_files(&self) -> &'static [&'static str] {
        &["package.json"]
    }
}
