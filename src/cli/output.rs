use colored::*;

use crate::common::format::{format_count, format_dir_count, format_path};
use crate::sweeper::{DirectiveReport, RunReport, SweepMode};

/// Print a run report in human-readable format
pub fn print_run_report(report: &RunReport) {
    let dry_run = report.directives.iter().any(|d| d.dry_run);

    println!();
    if dry_run {
        println!("  tidysweep — dry run, nothing was deleted");
    } else {
        println!("  tidysweep — run complete");
    }
    println!("{}", "─".repeat(60).dimmed());

    for directive in &report.directives {
        print_directive_report(directive);
    }

    println!("{}", "─".repeat(60).dimmed());
    let verb = if dry_run { "Would remove" } else { "Removed" };
    println!(
        "  {} {}, pruned {}",
        verb,
        format_count(report.total_files()).bold(),
        format_dir_count(report.total_dirs()).bold()
    );
    println!();
}

fn print_directive_report(report: &DirectiveReport) {
    let mode = match &report.mode {
        SweepMode::ByExtension(ext) => format!("files ending '{}'", ext).cyan(),
        SweepMode::EmptyOut => "empty out".cyan(),
    };
    println!(
        "  {} {}  ({})  {} removed, {} pruned",
        "●".green(),
        format_path(&report.path),
        mode,
        format_count(report.files_removed),
        format_dir_count(report.dirs_removed).dimmed()
    );
}

/// Print a run report as pretty JSON
pub fn print_run_json(report: &RunReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize report: {}", e),
    }
}

/// Minimal output: total files removed, then total dirs pruned
pub fn print_run_quiet(report: &RunReport) {
    println!("{}  {}", report.total_files(), report.total_dirs());
}
