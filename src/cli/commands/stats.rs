use anyhow::{Ok, Result};

use super::{
    helper::{finish, load_scan},
    {CatalogStats, CommandResult, CommandSummary, StatsSummary},
};

use crate::{
    catalog::TranslationStatus,
    cli::args::{StatsCommand, StatsFormat},
    issues::Issue,
    scan::CatalogFile,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let (scan, _config) = load_scan(&args.common)?;

    let catalogs: Vec<CatalogStats> = scan.catalogs.iter().map(collect_stats).collect();

    let issues: Vec<Issue> = scan
        .parse_errors
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    let catalogs_checked = scan.catalogs.len();
    Ok(finish(
        CommandSummary::Stats(StatsSummary {
            json: args.format == StatsFormat::Json,
            catalogs,
        }),
        issues,
        catalogs_checked,
        true,
    ))
}

pub fn collect_stats(file: &CatalogFile) -> CatalogStats {
    let catalog = &file.catalog;
    let mut stats = CatalogStats {
        path: file.path.clone(),
        language: catalog.language.clone(),
        contexts: catalog.contexts.len(),
        messages: 0,
        finished: 0,
        unfinished: 0,
        untranslated: 0,
        retired: 0,
    };

    for context in &catalog.contexts {
        for message in &context.messages {
            stats.messages += 1;
            match message.status {
                TranslationStatus::Finished if message.translation.is_empty() => {
                    stats.untranslated += 1;
                }
                TranslationStatus::Finished => stats.finished += 1,
                TranslationStatus::Unfinished => stats.unfinished += 1,
                TranslationStatus::Vanished | TranslationStatus::Obsolete => stats.retired += 1,
            }
        }
    }

    stats
}
