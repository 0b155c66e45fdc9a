use anyhow::{Context, Ok, Result};

use super::{
    helper::finish,
    {CommandResult, CommandSummary, MergeSummary},
};

use crate::{
    catalog::{self, LocationMode, MergeOptions, save_catalog},
    cli::args::MergeCommand,
    scan::load_catalog_file,
};

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let template = load_catalog_file(&cmd.template)
        .with_context(|| format!("Failed to load template catalog {:?}", cmd.template))?;
    let translated = load_catalog_file(&cmd.translated)
        .with_context(|| format!("Failed to load translated catalog {:?}", cmd.translated))?;

    let (merged, outcome) = catalog::merge(
        &template,
        &translated,
        MergeOptions {
            no_obsolete: cmd.no_obsolete,
        },
    );

    let output = cmd.output.unwrap_or_else(|| cmd.translated.clone());
    save_catalog(&merged, &output, LocationMode::Relative)
        .with_context(|| format!("Failed to write merged catalog {:?}", output))?;

    Ok(finish(
        CommandSummary::Merge(MergeSummary {
            output: output.display().to_string(),
            carried: outcome.carried,
            added: outcome.added,
            vanished: outcome.vanished,
            message_count: merged.message_count(),
        }),
        Vec::new(),
        2,
        true,
    ))
}
