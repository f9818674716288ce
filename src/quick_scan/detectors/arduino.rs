//! Arduino / PlatformIO detector.

use crate::quick_scan::ProjectDetector;

/// Detector for Arduino sketches and PlatformIO projects.
pub struct ArduinoDetector;

impl ProjectDetector for ArduinoDetector {
    fn label(&self) -> &'static str {
        "Arduino"
    }

    fn indicator_files(&self) -> &'static [&'static str] {
        &[".ino", "platformio.ini"]
    }
}
