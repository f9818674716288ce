//! Progress reporting, one unit of work per scan root.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Receives progress notifications from the scanner.
pub trait ScanProgress: Send + Sync {
    /// Called once before the first root.
    fn start(&self, total_roots: usize);

    /// Called after each root, including roots that were skipped.
    fn root_finished(&self, root: &Path);

    /// Called once after the last root.
    fn finish(&self);
}

/// Discards all progress notifications.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ScanProgress for NoProgress {
    fn start(&self, _total_roots: usize) {}
    fn root_finished(&self, _root: &Path) {}
    fn finish(&self) {}
}

/// Counts finished roots.
#[derive(Debug, Default)]
pub struct ProgressCounter {
    total: AtomicUsize,
    completed: AtomicUsize,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

impl ScanProgress for ProgressCounter {
    fn start(&self, total_roots: usize) {
        self.total.store(total_roots, Ordering::SeqCst);
        self.completed.store(0, Ordering::SeqCst);
    }

    fn root_finished(&self, _root: &Path) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }

    fn finish(&self) {}
}

/// Terminal progress bar.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanProgress for BarProgress {
    fn start(&self, total_roots: usize) {
        self.bar.set_length(total_roots as u64);
        self.bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.cyan} Scanning directories... [{bar:30.cyan/blue}] {pos}/{len} {elapsed_precise} {msg}")
        {
            self.bar.set_style(style.progress_chars("=> "));
        }
        self.bar.enable_steady_tick(std::time::Duration::from_millis(120));
    }

    fn root_finished(&self, root: &Path) {
        self.bar.set_message(root.display().to_string());
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
