use anyhow::{Context, Ok, Result};

use super::{
    helper::finish,
    {CommandResult, CommandSummary, StripSummary},
};

use crate::{
    catalog::{LocationMode, save_catalog},
    cli::args::StripCommand,
    scan::load_catalog_file,
};

pub fn strip(cmd: StripCommand) -> Result<CommandResult> {
    let mut catalog = load_catalog_file(&cmd.catalog)
        .with_context(|| format!("Failed to load catalog {:?}", cmd.catalog))?;

    let outcome = catalog.strip(cmd.keep_locations);

    let output = cmd.output.unwrap_or_else(|| cmd.catalog.clone());
    save_catalog(&catalog, &output, LocationMode::Relative)
        .with_context(|| format!("Failed to write stripped catalog {:?}", output))?;

    Ok(finish(
        CommandSummary::Strip(StripSummary {
            output: output.display().to_string(),
            removed_messages: outcome.removed_messages,
            removed_contexts: outcome.removed_contexts,
            dropped_locations: outcome.dropped_locations,
        }),
        Vec::new(),
        1,
        true,
    ))
}
