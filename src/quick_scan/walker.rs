//! Depth-first traversal that classifies directories as it goes.

use std::collections::HashSet;
use std::fs;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::{debug, info, trace, warn};

use crate::error::{OrganizerError, Result};
use crate::fs_utils::{count_files, dir_size, is_empty_dir, should_exclude};
use crate::quick_scan::artifacts::check_quick_win;
use crate::quick_scan::detector::DirListing;
use crate::quick_scan::duplicates::find_duplicates;
use crate::quick_scan::options::{InterruptPolicy, ScanOptions};
use crate::quick_scan::progress::{NoProgress, ScanProgress};
use crate::quick_scan::registry::DetectorRegistry;
use crate::quick_scan::result::{ProjectSummary, ScanResult};
use crate::quick_scan::security::scan_files;

/// Walks a set of roots and produces a [`ScanResult`].
///
/// Projects are leaves: once a directory is classified, nothing below it
/// is visited. Symlinked directories are followed, but each canonical
/// path is visited at most once per scan.
pub struct QuickScanner {
    roots: Vec<PathBuf>,
    options: ScanOptions,
    registry: DetectorRegistry,
    progress: Arc<dyn ScanProgress>,
    interrupt: Option<Arc<AtomicBool>>,
}

impl QuickScanner {
    pub fn new(roots: Vec<PathBuf>, options: ScanOptions) -> Self {
        Self {
            roots,
            options,
            registry: DetectorRegistry::new(),
            progress: Arc::new(NoProgress),
            interrupt: None,
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ScanProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// Abort the scan once `flag` becomes true.
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Scan every root in order, then group duplicates and compute totals.
    ///
    /// Missing roots are logged and skipped. An interrupt yields
    /// [`OrganizerError::Interrupted`], carrying the partial result only
    /// under [`InterruptPolicy::Partial`].
    pub fn scan(&self) -> Result<ScanResult> {
        info!(roots = self.roots.len(), "Starting quick scan");
        self.progress.start(self.roots.len());

        let mut walk = Walk::new(self);
        let mut flow = ControlFlow::Continue(());

        for root in &self.roots {
            if !root.exists() {
                warn!(path = %root.display(), "Path does not exist, skipping");
                self.progress.root_finished(root);
                continue;
            }

            debug!(path = %root.display(), "Scanning root");
            flow = walk.visit(root, 0);
            if flow.is_break() {
                break;
            }
            self.progress.root_finished(root);
        }

        self.progress.finish();
        let mut result = walk.into_result();

        if flow.is_break() {
            warn!("Scan interrupted by user");
            let partial = match self.options.on_interrupt {
                InterruptPolicy::Discard => None,
                InterruptPolicy::Partial => {
                    finalize(&mut result);
                    Some(Box::new(result))
                }
            };
            return Err(OrganizerError::Interrupted { partial });
        }

        finalize(&mut result);
        info!(
            projects = result.total_projects,
            quick_wins = result.quick_wins.len(),
            security = result.security_findings.len(),
            "Quick scan complete"
        );
        Ok(result)
    }
}

impl std::fmt::Debug for QuickScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuickScanner")
            .field("roots", &self.roots)
            .field("options", &self.options)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

fn finalize(result: &mut ScanResult) {
    result.duplicates = find_duplicates(&result.projects);
    result.calculate_totals();
}

/// State owned by a single scan invocation.
struct Walk<'a> {
    scanner: &'a QuickScanner,
    visited: HashSet<PathBuf>,
    result: ScanResult,
}

impl<'a> Walk<'a> {
    fn new(scanner: &'a QuickScanner) -> Self {
        Self {
            scanner,
            visited: HashSet::new(),
            result: ScanResult::new(),
        }
    }

    fn into_result(self) -> ScanResult {
        self.result
    }

    fn interrupted(&self) -> bool {
        self.scanner
            .interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    fn visit(&mut self, dir: &Path, depth: usize) -> ControlFlow<()> {
        if self.interrupted() {
            return ControlFlow::Break(());
        }

        let Ok(dir) = dir.canonicalize() else {
            trace!(path = %dir.display(), "Cannot resolve path, skipping");
            return ControlFlow::Continue(());
        };

        if !self.visited.insert(dir.clone()) {
            return ControlFlow::Continue(());
        }

        let scanner = self.scanner;
        let options = &scanner.options;
        if should_exclude(&dir, &options.exclude_patterns) {
            debug!(path = %dir.display(), "Excluded, skipping");
            return ControlFlow::Continue(());
        }

        if depth > options.max_depth {
            debug!(path = %dir.display(), depth, "Depth limit reached, skipping");
            return ControlFlow::Continue(());
        }

        let listing = match DirListing::read(&dir) {
            Ok(listing) => listing,
            Err(err) => {
                debug!(path = %dir.display(), %err, "Cannot list directory, skipping");
                return ControlFlow::Continue(());
            }
        };

        if let Some(label) = scanner.registry.classify(&listing) {
            self.record_project(&dir, label, &listing);
            return ControlFlow::Continue(());
        }

        if let Some(win) = check_quick_win(&dir) {
            debug!(path = %dir.display(), size = win.size, "Quick win");
            self.result.quick_wins.push(win);
        }

        self.result
            .security_findings
            .extend(scan_files(&dir, &listing.files, options.multi_match));

        if is_empty_dir(&dir) {
            self.result.empty_folders.push(dir.clone());
        }

        for subdir in &listing.subdirs {
            self.visit(subdir, depth + 1)?;
        }

        ControlFlow::Continue(())
    }

    fn record_project(&mut self, dir: &Path, label: &str, listing: &DirListing) {
        let last_modified = fs::metadata(dir)
            .and_then(|m| m.modified())
            .map(DateTime::<Local>::from)
            .unwrap_or_else(|_| Local::now());

        let summary = ProjectSummary {
            path: dir.to_path_buf(),
            project_type: label.to_string(),
            size: dir_size(dir),
            last_modified,
            file_count: count_files(dir, None),
            has_git: listing.has_vcs,
        };

        debug!(path = %dir.display(), kind = label, size = summary.size, "Found project");
        self.result.record_project(summary);
    }
}
