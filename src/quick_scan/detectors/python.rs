//! Python project detector.

use crate::quick_scan::ProjectDetector;

/// Detector for Python projects (`setup.py`, `pyproject.toml`,
/// `requirements.txt`).
pub struct PythonDetector;

impl ProjectDetector for PythonDetector {
    fn label(&self) -> &'static str {
        "Python"
    }

    fn indicator_files(&self) -> &'static [&'static str] {
        &["setup.py", "pyproject.toml", "requirements.txt"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quick_scan::DirListing;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_python_detection() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("pyproject.toml"), "[project]").unwrap();

        let listing = DirListing::read(tmp.path()).unwrap();
        assert!(PythonDetector.detect(&listing));
    }

    #[test]
    fn test_python_ignores_loose_scripts() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("script.py"), "print()").unwrap();

        let listing = DirListing::read(tmp.path()).unwrap();
        assert!(!PythonDetector.detect(&listing));
    }
}
