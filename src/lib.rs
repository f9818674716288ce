//! Code Organizer - scan, analyze and organize scattered source code
//!
//! This crate provides functionality for:
//! - A quick scan of project directories (types, duplicates, quick wins)
//! - Filename-based security red flags
//! - Text and JSON reports of the findings

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs_utils;
pub mod quick_scan;
pub mod report;
pub mod signals;

// Re-export commonly used types
pub use config::Config;
pub use error::{OrganizerError, Result};
pub use quick_scan::{QuickScanner, ScanOptions, ScanResult};
