//! Retired entry detection.
//!
//! Vanished/obsolete entries are kept by merge so translations survive a
//! refactor, but they should not ship: they bloat the catalog and drift out
//! of date. This rule flags them so a release run can insist on a clean
//! tree.

use crate::issues::ObsoleteIssue;
use crate::rules::point_at;
use crate::scan::CatalogFile;

pub fn check_obsolete(file: &CatalogFile) -> Vec<ObsoleteIssue> {
    let mut issues = Vec::new();

    for context in &file.catalog.contexts {
        for message in &context.messages {
            if message.status.is_active() {
                continue;
            }
            let (location, catalog_line) = point_at(file, message.line);
            issues.push(ObsoleteIssue {
                location,
                context: context.name.clone(),
                source: message.source.clone(),
                catalog_line,
            });
        }
    }

    issues
}
