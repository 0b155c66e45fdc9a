//! Placeholder token mismatch detection.
//!
//! Source strings use Qt argument markers (`%1`, `%2`, ..., `%L1` for the
//! locale-aware form). A translation that drops or invents a marker will
//! render wrong at runtime, so the token sets must match exactly. `%L1`
//! and `%1` count as the same argument.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::issues::PlaceholderMismatchIssue;
use crate::rules::point_at;
use crate::scan::CatalogFile;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?([1-9][0-9]?)").unwrap());

/// The set of argument numbers referenced by a string.
pub fn placeholder_args(text: &str) -> BTreeSet<u32> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|captures| captures[1].parse().ok())
        .collect()
}

/// Check that every translated entry keeps the source's placeholder set.
pub fn check_placeholders(file: &CatalogFile) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for context in &file.catalog.contexts {
        for message in &context.messages {
            // Empty translations are the untranslated rule's business
            if !message.status.is_active() || message.translation.is_empty() {
                continue;
            }

            let in_source = placeholder_args(&message.source);
            let in_translation = placeholder_args(&message.translation);
            if in_source == in_translation {
                continue;
            }

            let (location, catalog_line) = point_at(file, message.line);
            issues.push(PlaceholderMismatchIssue {
                location,
                context: context.name.clone(),
                source: message.source.clone(),
                translation: message.translation.clone(),
                missing: format_args_list(in_source.difference(&in_translation)),
                extra: format_args_list(in_translation.difference(&in_source)),
                catalog_line,
            });
        }
    }

    issues
}

fn format_args_list<'a>(args: impl Iterator<Item = &'a u32>) -> Vec<String> {
    args.map(|n| format!("%{}", n)).collect()
}
