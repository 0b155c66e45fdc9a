//! Report formatting and printing utilities.
//!
//! This module displays issues in cargo-style format. Separate from core
//! logic so lingot can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, MergeSummary, StatsSummary, StripSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalogs: usize) {
    print_success_to(catalogs, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(catalogs: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no issues found",
            catalogs,
            if catalogs == 1 { "catalog" } else { "catalogs" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about catalogs that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} catalog(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();

    // Print severity and message (cargo-style)
    let severity = issue.severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        loc.path,
        loc.line,
        loc.col
    );

    // Print source context if available
    if let Some(source_line) = issue.source_line() {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            loc.line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix = if loc.col > 1 {
            source_line.chars().take(loc.col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .map(|i| i.location().line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_command_output(result);

    if matches!(result.summary, CommandSummary::Check) && result.issues.is_empty() {
        print_success(result.catalogs_checked);
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_command_output(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
        }
        CommandSummary::Stats(summary) => {
            print_stats(summary);
            report(&result.issues);
        }
        CommandSummary::Merge(summary) => {
            print_merge(summary);
        }
        CommandSummary::Strip(summary) => {
            print_strip(summary);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

fn print_stats(summary: &StatsSummary) {
    if summary.json {
        match serde_json::to_string_pretty(&summary.catalogs) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("{} {}", "error:".bold().red(), err),
        }
        return;
    }

    for stats in &summary.catalogs {
        let language = stats.language.as_deref().unwrap_or("?");
        println!("{} ({})", stats.path.bold(), language);
        println!("  contexts:     {}", stats.contexts);
        println!("  messages:     {}", stats.messages);
        println!("  finished:     {}", stats.finished.to_string().green());
        println!("  unfinished:   {}", stats.unfinished.to_string().yellow());
        println!("  untranslated: {}", stats.untranslated.to_string().red());
        println!("  retired:      {}", stats.retired);
        println!("  progress:     {:.1}%", stats.progress() * 100.0);
        println!();
    }
}

fn print_merge(summary: &MergeSummary) {
    println!(
        "{} {} {} ({} message(s))",
        SUCCESS_MARK.green(),
        "Merged into".green(),
        summary.output,
        summary.message_count
    );
    println!("  - carried:  {} translation(s)", summary.carried);
    println!("  - added:    {} new unfinished", summary.added);
    println!("  - vanished: {} no longer in template", summary.vanished);
}

fn print_strip(summary: &StripSummary) {
    println!(
        "{} {} {}",
        SUCCESS_MARK.green(),
        "Stripped".green(),
        summary.output
    );
    println!(
        "  - removed {} message(s), {} context(s)",
        summary.removed_messages, summary.removed_contexts
    );
    println!("  - dropped {} location hint(s)", summary.dropped_locations);
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {} {}",
            SUCCESS_MARK.green(),
            "Created".green(),
            CONFIG_FILE_NAME
        );
    }
}
