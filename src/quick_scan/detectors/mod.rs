//! Built-in project detectors.

mod arduino;
mod cpp;
mod docker;
mod dotnet;
mod node;
mod python;

pub use arduino::ArduinoDetector;
pub use cpp::CppDetector;
pub use docker::DockerDetector;
pub use dotnet::DotnetDetector;
pub use node::NodeDetector;
pub use python::PythonDetector;

use crate::quick_scan::ProjectDetector;

/// Returns all built-in detectors in classification order.
///
/// Order matters: the first detector that matches wins, so a directory
/// with both `package.json` and `Makefile` is a Node.js project.
pub fn all_detectors() -> Vec<Box<dyn ProjectDetector>> {
    vec![
        Box::new(DotnetDetector),
        Box::new(PythonDetector),
        Box::new(ArduinoDetector),
        Box::new(NodeDetector),
        Box::new(DockerDetector),
        Box::new(CppDetector),
    ]
}
