//! Rendering of a [`ScanResult`] for the terminal or as JSON.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::error::{OrganizerError, Result};
use crate::fs_utils::format_size;
use crate::quick_scan::{QuickWin, ScanResult};

/// Append one formatted line to a `String` buffer.
macro_rules! emit {
    ($out:expr, $($arg:tt)*) => {{
        $out.push_str(&format!($($arg)*));
        $out.push('\n');
    }};
}

/// Duplicate pairs shown before collapsing the rest.
const DUPLICATES_SHOWN: usize = 5;
/// Largest quick wins listed when there are more than this many.
const TOP_QUICK_WINS: usize = 5;

#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Rows listed per section before "... and N more"
    pub max_listed: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { max_listed: 10 }
    }
}

/// Pretty-printed JSON of the whole result.
pub fn render_json(result: &ScanResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| OrganizerError::ScanFailed(e.to_string()))
}

/// Human-readable multi-section report.
pub fn render_text(result: &ScanResult, options: &ReportOptions) -> String {
    let mut out = String::new();
    let rule = "=".repeat(80);

    emit!(out, "\n{rule}\n");
    summary(&mut out, result);
    projects_by_type(&mut out, result);
    quick_wins(&mut out, result);
    security(&mut out, result, options);
    duplicates(&mut out, result);
    empty_folders(&mut out, result, options);
    emit!(out, "{rule}");
    out
}

fn summary(out: &mut String, result: &ScanResult) {
    emit!(out, "{}\n", "QUICK SCAN SUMMARY".bold().cyan());
    emit!(
        out,
        "{} Total Projects Found: {}",
        "+".green(),
        result.total_projects.to_string().bold()
    );
    emit!(
        out,
        "{} Total Size: {}",
        "+".green(),
        format_size(result.total_size).bold()
    );
    emit!(
        out,
        "{} Quick Win Space: {} (can be freed safely)",
        "!".yellow(),
        format_size(result.quick_win_size()).bold()
    );
    emit!(
        out,
        "{} Security Issues: {} (need attention)",
        "!".red(),
        result.security_findings.len().to_string().bold()
    );
    emit!(
        out,
        "{} Empty Folders: {}",
        "*".blue(),
        result.empty_folders.len().to_string().bold()
    );
    emit!(
        out,
        "{} Potential Duplicates: {} pairs\n",
        "~".magenta(),
        result.duplicates.len().to_string().bold()
    );
}

fn projects_by_type(out: &mut String, result: &ScanResult) {
    if result.projects_by_type.is_empty() {
        return;
    }

    emit!(out, "{}", "[Projects by Type]".bold().magenta());
    emit!(out, "  {:<20} {:>8} {:>11}", "Project Type", "Count", "Percentage");

    let mut sorted: Vec<(&String, &usize)> = result.projects_by_type.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1));

    for (kind, count) in sorted {
        let pct = if result.total_projects > 0 {
            *count as f64 / result.total_projects as f64 * 100.0
        } else {
            0.0
        };
        emit!(out, "  {:<20} {:>8} {:>10.1}%", kind.cyan(), count, pct);
    }
    emit!(out, "  {}", "-".repeat(41));
    emit!(
        out,
        "  {:<20} {:>8} {:>11}\n",
        "TOTAL".bold(),
        result.total_projects,
        "100.0%"
    );
}

fn quick_wins(out: &mut String, result: &ScanResult) {
    if result.quick_wins.is_empty() {
        emit!(
            out,
            "{}\n",
            "No quick wins found - your codebase is already clean!".green()
        );
        return;
    }

    let mut by_category: BTreeMap<&str, Vec<&QuickWin>> = BTreeMap::new();
    for win in &result.quick_wins {
        by_category.entry(win.category.as_str()).or_default().push(win);
    }

    emit!(out, "{}", "[Quick Wins - Safe to Remove]".bold().yellow());
    emit!(out, "  {:<26} {:>6} {:>12}", "Category", "Count", "Total Size");
    for (category, wins) in &by_category {
        let size: u64 = wins.iter().map(|w| w.size).sum();
        emit!(
            out,
            "  {:<26} {:>6} {:>12}",
            category.yellow(),
            wins.len(),
            format_size(size)
        );
    }
    emit!(
        out,
        "  {:<26} {:>6} {:>12}",
        "TOTAL POTENTIAL SAVINGS".bold(),
        result.quick_wins.len(),
        format_size(result.quick_win_size())
    );

    if result.quick_wins.len() > TOP_QUICK_WINS {
        let mut largest: Vec<&QuickWin> = result.quick_wins.iter().collect();
        largest.sort_by(|a, b| b.size.cmp(&a.size));

        emit!(out, "\n  Top {TOP_QUICK_WINS} largest items:");
        for (i, win) in largest.iter().take(TOP_QUICK_WINS).enumerate() {
            emit!(
                out,
                "  {}. {} ({})",
                i + 1,
                win.path.display(),
                format_size(win.size)
            );
        }
    }
    out.push('\n');
}

fn security(out: &mut String, result: &ScanResult, options: &ReportOptions) {
    if result.security_findings.is_empty() {
        emit!(out, "{}\n", "No obvious security issues detected!".green());
        return;
    }

    emit!(out, "{}", "[Security Issues - Needs Review]".bold().red());
    for finding in result.security_findings.iter().take(options.max_listed) {
        emit!(
            out,
            "  {:<60} {}",
            finding.path.display().to_string().yellow(),
            finding.issue.red()
        );
    }
    more(out, result.security_findings.len(), options.max_listed, "");
    out.push('\n');
}

fn duplicates(out: &mut String, result: &ScanResult) {
    if result.duplicates.is_empty() {
        emit!(out, "{}\n", "No obvious duplicates detected!".green());
        return;
    }

    emit!(
        out,
        "{} {} pairs found",
        "Potential Duplicates:".bold().yellow(),
        result.duplicates.len()
    );
    emit!(out, "(These need manual review in deep scan)\n");

    for (i, pair) in result.duplicates.iter().take(DUPLICATES_SHOWN).enumerate() {
        emit!(out, "  {}. {}", (i + 1).to_string().cyan(), name_of(&pair.first));
        emit!(out, "     <-> {}\n", name_of(&pair.second));
    }
    more(out, result.duplicates.len(), DUPLICATES_SHOWN, " pairs");
}

fn empty_folders(out: &mut String, result: &ScanResult, options: &ReportOptions) {
    if result.empty_folders.is_empty() {
        return;
    }

    emit!(
        out,
        "{} {} found",
        "Empty Folders:".bold().blue(),
        result.empty_folders.len()
    );
    for folder in result.empty_folders.iter().take(options.max_listed) {
        emit!(out, "  - {}", folder.display());
    }
    more(out, result.empty_folders.len(), options.max_listed, "");
    out.push('\n');
}

fn more(out: &mut String, total: usize, shown: usize, noun: &str) {
    if total > shown {
        emit!(out, "  ... and {} more{noun}", total - shown);
    }
}

fn name_of(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
