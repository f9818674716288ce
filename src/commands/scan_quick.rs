//! Quick scan command implementation.

use std::io::IsTerminal;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::cli::QuickScanArgs;
use crate::config::Config;
use crate::error::OrganizerError;
use crate::quick_scan::{BarProgress, InterruptPolicy, NoProgress, QuickScanner, ScanProgress};
use crate::report::{self, ReportOptions};
use crate::signals;

/// Exit code for a scan stopped by SIGINT/SIGTERM.
pub const EXIT_INTERRUPTED: i32 = 130;

/// Run the quick scan command.
pub fn run(args: QuickScanArgs, config: &Config, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let roots = if args.paths.is_empty() {
        config.search_roots()
    } else {
        args.paths.clone()
    };

    let mut options = config.scan_options();
    options.exclude_patterns.extend(args.exclude.iter().cloned());
    if let Some(depth) = args.max_depth {
        options.max_depth = depth;
    }
    if args.partial {
        options.on_interrupt = InterruptPolicy::Partial;
    }

    let searching: Vec<String> = roots.iter().map(|r| r.display().to_string()).collect();
    info!("Searching in: {}", searching.join(", "));

    let progress: Arc<dyn ScanProgress> = if quiet || args.json {
        Arc::new(NoProgress)
    } else {
        Arc::new(BarProgress::new())
    };

    let interrupt = Arc::new(AtomicBool::new(false));
    if let Err(err) = signals::install_interrupt_handler(interrupt.clone()) {
        warn!(%err, "Could not install interrupt handler");
    }

    let scanner = QuickScanner::new(roots, options)
        .with_progress(progress)
        .with_interrupt(interrupt);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| scanner.scan())).unwrap_or_else(|cause| {
        let message = cause
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| cause.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(OrganizerError::ScanFailed(message))
    });

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
    let report_options = ReportOptions {
        max_listed: config.report.max_listed,
    };

    match outcome {
        Ok(result) => {
            if args.json {
                println!("{}", report::render_json(&result)?);
            } else {
                print!("{}", report::render_text(&result, &report_options));
                println!("\n>> Quick scan complete!\n");
                println!("Next steps:");
                println!("  - Run 'code-organizer scan' for a comprehensive deep analysis");
                println!("  - Run 'code-organizer scan-quick --help' for more options");
            }
            match log_file {
                Some(path) => info!("Scan complete. Log saved to: {}", path.display()),
                None => info!("Scan complete"),
            }
            Ok(())
        }
        Err(OrganizerError::Interrupted { partial }) => {
            eprintln!("\n! Scan interrupted by user.");
            if let Some(result) = partial {
                if args.json {
                    println!("{}", report::render_json(&result)?);
                } else {
                    println!("Partial results:");
                    print!("{}", report::render_text(&result, &report_options));
                }
            }
            std::process::exit(EXIT_INTERRUPTED);
        }
        Err(err) => {
            error!(error = ?err, "Scan failed");
            Err(err.into())
        }
    }
}
