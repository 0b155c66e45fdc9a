//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all lingot
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (untranslated, placeholders, duplicates, ...)
//! - `stats`: Show translation progress per catalog
//! - `merge`: Sync a translated catalog against a fresh template
//! - `strip`: Remove retired entries and location hints, lrelease-style
//! - `init`: Initialize lingot configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Stats(cmd)) => cmd.args.common.verbose,
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Strip(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing .ts catalogs, or a single catalog file
    /// (overrides config file)
    #[arg(long)]
    pub catalogs_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: StatsFormat,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub args: StatsArgs,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// Template catalog with the current source strings (fresh extraction)
    pub template: PathBuf,

    /// Translated catalog to carry translations from
    pub translated: PathBuf,

    /// Where to write the merged catalog (defaults to overwriting TRANSLATED)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Drop entries missing from the template instead of marking them vanished
    #[arg(long)]
    pub no_obsolete: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StripCommand {
    /// Catalog to strip
    pub catalog: PathBuf,

    /// Where to write the stripped catalog (defaults to overwriting CATALOG)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep <location> hints instead of dropping them
    #[arg(long)]
    pub keep_locations: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for issues (untranslated entries, placeholder
    /// mismatches, conflicting duplicates, retired entries)
    Check(CheckCommand),
    /// Show per-catalog translation statistics
    Stats(StatsCommand),
    /// Merge a translated catalog with a freshly extracted template
    Merge(MergeCommand),
    /// Remove vanished/obsolete entries and location hints from a catalog
    Strip(StripCommand),
    /// Initialize a new .lingotrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
