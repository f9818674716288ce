use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Code Organizer - Scan, analyze, and organize scattered source code
#[derive(Parser, Debug)]
#[command(name = "code-organizer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fast overview: projects by type, duplicates, quick wins, security red flags
    ScanQuick(QuickScanArgs),

    /// Comprehensive deep scan
    Scan,

    /// Organize and clean up projects
    Organize,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct QuickScanArgs {
    /// Paths to scan (can be specified multiple times, overrides config)
    #[arg(short, long = "paths", value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Extra exclude substrings (added to the configured ones)
    #[arg(short, long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Maximum depth below each root
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Report partial findings when interrupted
    #[arg(long)]
    pub partial: bool,
}
