//! C/C++ project detector.

use crate::quick_scan::ProjectDetector;

/// Detector for C and C++ projects built with CMake or Make.
///
/// Checked last among the built-ins: a Makefile is common in other
/// project types too.
pub struct CppDetector;

impl ProjectDetector for CppDetector {
    fn label(&self) -> &'static str {
        "C/C++"
    }

    fn indicator_files(&self) -> &'static [&'static str] {
        &["CMakeLists.txt", "Makefile"]
    }
}
