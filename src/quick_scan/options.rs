use serde::{Deserialize, Serialize};

use crate::quick_scan::security::MultiMatch;

/// Default depth limit below each scan root.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// What an interrupted scan hands back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterruptPolicy {
    /// Drop everything collected so far.
    #[default]
    Discard,
    /// Return the findings gathered before the interrupt.
    Partial,
}

/// Configuration options for a quick scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directories deeper than this below a root are not visited
    pub max_depth: usize,

    /// Substrings that exclude a path and everything below it
    pub exclude_patterns: Vec<String>,

    pub on_interrupt: InterruptPolicy,

    pub multi_match: MultiMatch,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            exclude_patterns: Vec::new(),
            on_interrupt: InterruptPolicy::default(),
            multi_match: MultiMatch::default(),
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn with_interrupt_policy(mut self, policy: InterruptPolicy) -> Self {
        self.on_interrupt = policy;
        self
    }

    pub fn with_multi_match(mut self, mode: MultiMatch) -> Self {
        self.multi_match = mode;
        self
    }
}
