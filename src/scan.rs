//! Catalog discovery and loading.
//!
//! Discovery walks the configured catalogs root for `*.ts` files, applies
//! the configured ignore patterns, and parses the survivors in parallel.
//! A catalog that fails to parse becomes a `parse-error` issue instead of
//! aborting the whole run, so one broken file does not hide results for
//! the others.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::catalog::{Catalog, parse_catalog};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::ParseErrorIssue;

/// One successfully loaded catalog plus the raw lines of its file, kept for
/// the reporter's source-context display.
#[derive(Debug)]
pub struct CatalogFile {
    /// Display path, relative to where the scan started.
    pub path: String,
    pub catalog: Catalog,
    lines: Vec<String>,
}

impl CatalogFile {
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        let catalog = parse_catalog(content)?;
        Ok(Self {
            path: path.to_string(),
            catalog,
            lines: content.lines().map(str::to_string).collect(),
        })
    }

    /// The raw catalog line (1-based) and the 1-based column of its first
    /// non-blank character, for caret placement.
    pub fn point(&self, line: usize) -> (Option<String>, usize) {
        match line.checked_sub(1).and_then(|i| self.lines.get(i)) {
            Some(text) => {
                let col = text.chars().take_while(|c| c.is_whitespace()).count() + 1;
                (Some(text.clone()), col)
            }
            None => (None, 1),
        }
    }
}

/// Result of loading all discovered catalogs.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub catalogs: Vec<CatalogFile>,
    pub parse_errors: Vec<ParseErrorIssue>,
}

/// Find catalog files under `root`, sorted for deterministic output.
///
/// `root` may also name a single catalog file directly, in which case
/// ignore patterns do not apply.
pub fn discover_catalogs(root: &Path, ignores: &[Pattern]) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!(
            "Catalogs directory '{}' does not exist.\n\
             Hint: Check your {} 'catalogsRoot' setting.",
            root.display(),
            CONFIG_FILE_NAME
        );
    }

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to walk catalogs directory: {}", root.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("ts") {
            continue;
        }
        if ignores.iter().any(|pattern| pattern.matches_path(path)) {
            continue;
        }
        paths.push(path.to_path_buf());
    }

    Ok(paths)
}

/// Parse catalogs in parallel. Unreadable or malformed files surface as
/// parse-error issues.
pub fn load_catalogs(paths: &[PathBuf]) -> ScanResult {
    let loaded: Vec<Result<CatalogFile, ParseErrorIssue>> = paths
        .par_iter()
        .map(|path| {
            let display = display_path(path);
            let content = fs::read_to_string(path)
                .map_err(|e| ParseErrorIssue::new(&display, &e.to_string()))?;
            CatalogFile::parse(&display, &content)
                .map_err(|e| ParseErrorIssue::new(&display, &format!("{e:#}")))
        })
        .collect();

    let mut result = ScanResult::default();
    for item in loaded {
        match item {
            Ok(catalog) => result.catalogs.push(catalog),
            Err(error) => result.parse_errors.push(error),
        }
    }
    result
}

/// Load a single catalog, failing fast on errors. Used when the user names
/// an explicit file (merge, strip).
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    crate::catalog::load_catalog(path)
}

fn display_path(path: &Path) -> String {
    let display = path.display().to_string();
    display
        .strip_prefix("./")
        .map(str::to_string)
        .unwrap_or(display)
}
