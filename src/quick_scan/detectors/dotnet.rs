//! .NET project detector.

use crate::quick_scan::ProjectDetector;

/// Detector for .NET solutions and projects.
///
/// Indicators are compared by exact file name, so only files literally
/// named `.sln` or `.csproj` match; `App.csproj` does not.
pub struct DotnetDetector;

impl ProjectDetector for DotnetDetector {
    fn label(&self) -> &'static str {
        ".NET"
    }

    fn indicator_files(&self) -> &'static [&'static str] {
        &[".sln", ".csproj", ".vbproj", ".fsproj"]
    }
}
