//! Empty and unfinished translation detection.
//!
//! An active entry with an empty translation means the renderer will fall
//! back to the source string for this locale, so it is reported as an
//! error. An entry that carries text but is still marked
//! `type="unfinished"` only needs translator review and is a warning.

use crate::issues::{UnfinishedIssue, UntranslatedIssue};
use crate::rules::point_at;
use crate::scan::CatalogFile;

/// Check for active entries with no translation at all.
pub fn check_untranslated(file: &CatalogFile) -> Vec<UntranslatedIssue> {
    let mut issues = Vec::new();

    for context in &file.catalog.contexts {
        for message in &context.messages {
            if !message.status.is_active() || !message.translation.is_empty() {
                continue;
            }
            let (location, catalog_line) = point_at(file, message.line);
            issues.push(UntranslatedIssue {
                location,
                context: context.name.clone(),
                source: message.source.clone(),
                catalog_line,
            });
        }
    }

    issues
}

/// Check for entries still marked unfinished despite carrying text.
pub fn check_unfinished(file: &CatalogFile) -> Vec<UnfinishedIssue> {
    let mut issues = Vec::new();

    for context in &file.catalog.contexts {
        for message in &context.messages {
            if message.status != crate::catalog::TranslationStatus::Unfinished
                || message.translation.is_empty()
            {
                continue;
            }
            let (location, catalog_line) = point_at(file, message.line);
            issues.push(UnfinishedIssue {
                location,
                context: context.name.clone(),
                source: message.source.clone(),
                translation: message.translation.clone(),
                catalog_line,
            });
        }
    }

    issues
}
