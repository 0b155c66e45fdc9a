use anyhow::{Ok, Result};
use clap::ValueEnum;
use rayon::prelude::*;

use super::{
    helper::{finish, load_scan},
    {CommandResult, CommandSummary},
};

use crate::{
    cli::args::CheckCommand,
    issues::Issue,
    rules::{
        consistency::check_consistency,
        duplicates::check_duplicates,
        obsolete::check_obsolete,
        placeholders::check_placeholders,
        untranslated::{check_unfinished, check_untranslated},
    },
    scan::CatalogFile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Untranslated,
    Unfinished,
    Placeholders,
    Duplicates,
    Obsolete,
    Consistency,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Untranslated,
            CheckRule::Unfinished,
            CheckRule::Placeholders,
            CheckRule::Duplicates,
            CheckRule::Obsolete,
            CheckRule::Consistency,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let (scan, config) = load_scan(&args.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };

    let mut all_issues = run_checks(&scan.catalogs, &checks, &config.source_language);
    all_issues.extend(scan.parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        scan.catalogs.len(),
        true,
    ))
}

/// Run the selected rules over loaded catalogs. Shared with the MCP server.
///
/// The catalog for `source_language` skips the untranslated/unfinished
/// rules: a source-language catalog legitimately carries empty or unfinished
/// entries for every string.
pub fn run_checks(
    files: &[CatalogFile],
    checks: &[CheckRule],
    source_language: &str,
) -> Vec<Issue> {
    files
        .par_iter()
        .flat_map(|file| {
            let is_source_catalog = file.catalog.language.as_deref() == Some(source_language);
            let mut issues: Vec<Issue> = Vec::new();

            for check in checks {
                match check {
                    CheckRule::Untranslated => {
                        if !is_source_catalog {
                            issues.extend(
                                check_untranslated(file).into_iter().map(Issue::Untranslated),
                            );
                        }
                    }
                    CheckRule::Unfinished => {
                        if !is_source_catalog {
                            issues
                                .extend(check_unfinished(file).into_iter().map(Issue::Unfinished));
                        }
                    }
                    CheckRule::Placeholders => {
                        issues.extend(
                            check_placeholders(file)
                                .into_iter()
                                .map(Issue::PlaceholderMismatch),
                        );
                    }
                    CheckRule::Duplicates => {
                        issues.extend(
                            check_duplicates(file)
                                .into_iter()
                                .map(Issue::ConflictingDuplicate),
                        );
                    }
                    CheckRule::Obsolete => {
                        issues.extend(check_obsolete(file).into_iter().map(Issue::Obsolete));
                    }
                    CheckRule::Consistency => {
                        issues.extend(check_consistency(file).into_iter().map(Issue::Inconsistent));
                    }
                }
            }

            issues
        })
        .collect()
}
