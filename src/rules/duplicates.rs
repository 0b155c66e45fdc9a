//! Conflicting duplicate detection.
//!
//! Repeating a source string within a context is legal (the same string is
//! extracted from several widgets) and lookup resolves it deterministically:
//! the first usable entry wins. A repeat that carries a *different*
//! translation is almost certainly a mistake, because the later translation
//! can never be observed.

use std::collections::HashMap;

use crate::issues::ConflictingDuplicateIssue;
use crate::rules::point_at;
use crate::scan::CatalogFile;

pub fn check_duplicates(file: &CatalogFile) -> Vec<ConflictingDuplicateIssue> {
    let mut issues = Vec::new();

    for context in &file.catalog.contexts {
        // source -> (line, translation) of the entry lookup would pick
        let mut first_seen: HashMap<&str, (usize, &str)> = HashMap::new();

        for message in &context.messages {
            if !message.status.is_active() || message.translation.is_empty() {
                continue;
            }

            match first_seen.get(message.source.as_str()) {
                None => {
                    first_seen.insert(
                        message.source.as_str(),
                        (message.line, message.translation.as_str()),
                    );
                }
                Some(&(first_line, first_translation)) => {
                    if first_translation == message.translation {
                        continue;
                    }
                    let (location, catalog_line) = point_at(file, message.line);
                    issues.push(ConflictingDuplicateIssue {
                        location,
                        context: context.name.clone(),
                        source: message.source.clone(),
                        translation: message.translation.clone(),
                        first_line,
                        first_translation: first_translation.to_string(),
                        catalog_line,
                    });
                }
            }
        }
    }

    issues
}
