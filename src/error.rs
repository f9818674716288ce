use std::path::PathBuf;
use thiserror::Error;

use crate::quick_scan::ScanResult;

/// Core library errors
#[derive(Error, Debug)]
pub enum OrganizerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The scan was stopped by the user. `partial` holds whatever had been
    /// collected when the caller asked for partial results.
    #[error("Scan interrupted by user")]
    Interrupted { partial: Option<Box<ScanResult>> },

    #[error("Scan failed: {0}")]
    ScanFailed(String),
}

impl OrganizerError {
    pub fn is_interrupted(&self) -> bool {
        matches!(self, OrganizerError::Interrupted { .. })
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OrganizerError>;
