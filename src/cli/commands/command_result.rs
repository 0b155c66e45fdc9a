use serde::Serialize;

use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Stats(StatsSummary),
    Merge(MergeSummary),
    Strip(StripSummary),
    Init(InitSummary),
}

/// Translation counters for a single catalog file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub path: String,
    pub language: Option<String>,
    pub contexts: usize,
    pub messages: usize,
    /// Finished entries with a non-empty translation.
    pub finished: usize,
    /// Entries marked type="unfinished".
    pub unfinished: usize,
    /// Active entries with an empty translation.
    pub untranslated: usize,
    /// Vanished or obsolete entries.
    pub retired: usize,
}

impl CatalogStats {
    /// Completion ratio over the entries that still count (retired entries
    /// are excluded from the denominator).
    pub fn progress(&self) -> f64 {
        let active = self.messages - self.retired;
        if active == 0 {
            1.0
        } else {
            self.finished as f64 / active as f64
        }
    }
}

#[derive(Debug)]
pub struct StatsSummary {
    pub json: bool,
    pub catalogs: Vec<CatalogStats>,
}

#[derive(Debug)]
pub struct MergeSummary {
    pub output: String,
    pub carried: usize,
    pub added: usize,
    pub vanished: usize,
    pub message_count: usize,
}

#[derive(Debug)]
pub struct StripSummary {
    pub output: String,
    pub removed_messages: usize,
    pub removed_contexts: usize,
    pub dropped_locations: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running lingot commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0.
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of catalog files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalog files that were loaded.
    pub catalogs_checked: usize,
}
