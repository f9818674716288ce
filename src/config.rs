use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::fs_utils::expand_tilde;
use crate::quick_scan::{InterruptPolicy, MultiMatch, ScanOptions, DEFAULT_MAX_DEPTH};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub security: SecurityConfig,
    pub logging: LoggingConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Roots to scan; a leading `~` is expanded
    pub search_paths: Vec<String>,
    /// Substrings that exclude a path from the scan
    pub exclude_paths: Vec<String>,
    /// Depth limit below each root
    pub max_depth: usize,
    /// discard or partial
    pub on_interrupt: InterruptPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// all: one finding per matching pattern; first: one per file
    pub multi_match: MultiMatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// debug, info, warning, error or critical
    pub log_level: String,
    /// Directory for per-run log files (None = console only)
    pub log_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum rows listed per report section
    pub max_listed: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            search_paths: vec!["~".to_string()],
            exclude_paths: [
                "/node_modules",
                "/.venv",
                "/venv",
                "/env",
                "/build",
                "/dist",
                "/bin",
                "/obj",
                "/__pycache__",
                "/.vs",
                "/target",
                "/Library",
                "/System",
                "/Windows",
                "/Program Files",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            max_depth: DEFAULT_MAX_DEPTH,
            on_interrupt: InterruptPolicy::Discard,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { max_listed: 10 }
    }
}

impl Config {
    /// Default location: `<config dir>/code-organizer/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("code-organizer").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config = Self::from_toml(&contents).map_err(|source| ConfigError::ParseError {
            path: path.clone(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.scan.search_paths.is_empty() {
            return Err(ConfigError::Invalid(
                "scan.search_paths must not be empty".into(),
            ));
        }
        if self.scan.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "scan.max_depth must be at least 1".into(),
            ));
        }
        if self.scan.exclude_paths.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::Invalid(
                "scan.exclude_paths must not contain empty patterns".into(),
            ));
        }
        self.logging.filter_level()?;
        Ok(())
    }

    /// Search roots with `~` expanded.
    pub fn search_roots(&self) -> Vec<PathBuf> {
        self.scan
            .search_paths
            .iter()
            .map(|p| expand_tilde(p))
            .collect()
    }

    /// Scanner options built from the `scan` and `security` sections.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new()
            .with_max_depth(self.scan.max_depth)
            .with_exclude(self.scan.exclude_paths.clone())
            .with_interrupt_policy(self.scan.on_interrupt)
            .with_multi_match(self.security.multi_match)
    }
}

impl LoggingConfig {
    /// Map the configured level to a tracing filter directive.
    pub fn filter_level(&self) -> std::result::Result<&'static str, ConfigError> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok("trace"),
            "debug" => Ok("debug"),
            "info" => Ok("info"),
            "warn" | "warning" => Ok("warn"),
            "error" | "critical" => Ok("error"),
            other => Err(ConfigError::Invalid(format!("unknown log level '{other}'"))),
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir.as_deref().map(expand_tilde)
    }
}
