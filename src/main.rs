use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use code_organizer::cli::{Cli, Command};
use code_organizer::commands;
use code_organizer::config::{Config, LoggingConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Initialize logging based on verbosity and config
    let log_file = init_logging(cli.verbose, cli.quiet, &config.logging)?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::ScanQuick(args) => {
            tracing::info!(?args, "Starting quick scan");
            commands::scan_quick::run(args, &config, cli.quiet, log_file)?;
        }
        Command::Scan => commands::not_implemented("Deep scan"),
        Command::Organize => commands::not_implemented("Phase 2 organization"),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "code-organizer", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Console logging on stderr, plus a debug-level file when `log_dir` is set.
///
/// Returns the path of the log file, if one was created.
fn init_logging(verbosity: u8, quiet: bool, logging: &LoggingConfig) -> Result<Option<PathBuf>> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => logging.filter_level()?,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("code_organizer={level}")));

    let (file_layer, log_path) = match logging.log_dir() {
        Some(dir) => {
            fs::create_dir_all(&dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
            let stamp = chrono::Local::now().format("%Y-%m-%d_%H%M%S");
            let path = dir.join(format!("code_organizer_{stamp}.log"));
            let file = File::create(&path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_filter(EnvFilter::new("code_organizer=debug"));
            (Some(layer), Some(path))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .with(file_layer)
        .init();

    Ok(log_path)
}
