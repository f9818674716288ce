//! Subcommand implementations.

pub mod scan_quick;

/// Placeholder for phases that are not available yet.
pub fn not_implemented(what: &str) {
    println!("{what} not yet implemented. Use 'scan-quick' for now.");
}
