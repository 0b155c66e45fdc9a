//! Cross-context consistency check.
//!
//! Contexts resolve independently, so "Save" in `MaterialEdit` and "Save"
//! in `MeshEdit` may legitimately differ. Most of the time they should
//! not, and a divergence usually means one context was updated and the
//! other forgotten. Reported per later occurrence, against the first
//! context that translated the string.
//!
//! Sources without alphabetic content ("%1", "...") are skipped; they have
//! nothing to translate consistently.

use std::collections::HashMap;

use crate::issues::InconsistentIssue;
use crate::rules::point_at;
use crate::scan::CatalogFile;
use crate::utils::contains_alphabetic;

pub fn check_consistency(file: &CatalogFile) -> Vec<InconsistentIssue> {
    let mut issues = Vec::new();
    // source -> (context, translation) of the first context translating it
    let mut first_seen: HashMap<&str, (&str, &str)> = HashMap::new();

    for context in &file.catalog.contexts {
        for message in &context.messages {
            if !message.status.is_active()
                || message.translation.is_empty()
                || !contains_alphabetic(&message.source)
            {
                continue;
            }

            match first_seen.get(message.source.as_str()) {
                None => {
                    first_seen.insert(
                        message.source.as_str(),
                        (context.name.as_str(), message.translation.as_str()),
                    );
                }
                Some(&(other_context, other_translation)) => {
                    if other_context == context.name || other_translation == message.translation {
                        continue;
                    }
                    let (location, catalog_line) = point_at(file, message.line);
                    issues.push(InconsistentIssue {
                        location,
                        context: context.name.clone(),
                        source: message.source.clone(),
                        translation: message.translation.clone(),
                        other_context: other_context.to_string(),
                        other_translation: other_translation.to_string(),
                        catalog_line,
                    });
                }
            }
        }
    }

    issues
}
