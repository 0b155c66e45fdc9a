use std::path::PathBuf;

use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    issues::{Issue, Report, Severity},
    scan::{ScanResult, discover_catalogs, load_catalogs},
};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    catalogs_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        parse_error_count,
        catalogs_checked,
    }
}

/// Load configuration and scan the catalogs root shared by `check` and
/// `stats`. The `--catalogs-root` flag wins over the config file.
pub fn load_scan(common: &CommonArgs) -> Result<(ScanResult, Config)> {
    let cwd = std::env::current_dir()?;
    let loaded = load_config(&cwd)?;

    let root = common
        .catalogs_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&loaded.config.catalogs_root));

    let ignores = loaded.config.ignore_patterns()?;
    let paths = discover_catalogs(&root, &ignores)?;

    Ok((load_catalogs(&paths), loaded.config))
}
