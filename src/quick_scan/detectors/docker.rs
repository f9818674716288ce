use crate::quick_scan::ProjectDetector;

/// Detector for containerised projects.
pub struct DockerDetector;

impl ProjectDetector for DockerDetector {
    fn label(&self) -> &'static str {
        "Docker"
    }

    fn indicator_files(&self) -> &'static [&'static str] {
        &["Dockerfile", "docker-compose.yml"]
    }
}
