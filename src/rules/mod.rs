//! Rule implementations for lingot.
//!
//! This module contains pure functions that check one loaded catalog for
//! maintenance issues. Each function takes only the catalog file it needs
//! and returns a specific issue type; the check command wraps the results
//! into the [`Issue`](crate::issues::Issue) enum.
//!
//! ## Module Structure
//!
//! - `untranslated`: Empty or unfinished translation entries
//! - `placeholders`: `%1` token mismatches between source and translation
//! - `duplicates`: Conflicting duplicate entries within a context
//! - `obsolete`: Vanished/obsolete entries lingering in the catalog
//! - `consistency`: Same source translated differently across contexts

pub mod consistency;
pub mod duplicates;
pub mod obsolete;
pub mod placeholders;
pub mod untranslated;

use crate::issues::CatalogLocation;
use crate::scan::CatalogFile;

/// Location plus raw catalog line for a message, for the reporter's caret
/// display.
pub(crate) fn point_at(file: &CatalogFile, line: usize) -> (CatalogLocation, Option<String>) {
    let (text, col) = file.point(line);
    (CatalogLocation::new(&file.path, line, col), text)
}
