//! Runtime translation lookup.
//!
//! A [`Translator`] holds one catalog per target language and resolves
//! `(language, context, source)` at string-render time. The fallback
//! contract is strict: a missing language, context, or translation always
//! yields the source string itself — never an empty string and never an
//! error — so an incomplete catalog can never blank out the UI.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context as _, Result, bail};

use crate::catalog::{Catalog, load_catalog};

#[derive(Debug, Default)]
pub struct Translator {
    catalogs: HashMap<String, Catalog>,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a catalog under its declared language. An existing catalog
    /// for the same language is replaced.
    pub fn add_catalog(&mut self, catalog: Catalog) -> Result<()> {
        let Some(language) = catalog.language.clone() else {
            bail!("catalog has no language attribute and cannot be registered");
        };
        self.catalogs.insert(language, catalog);
        Ok(())
    }

    /// Load every `*.ts` file directly inside `root` and register it.
    pub fn load_dir(root: &Path) -> Result<Self> {
        let mut translator = Self::new();

        let entries = std::fs::read_dir(root)
            .with_context(|| format!("Failed to read catalog directory: {}", root.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("ts") {
                continue;
            }
            let catalog = load_catalog(&path)?;
            translator.add_catalog(catalog).with_context(|| {
                format!("Cannot register catalog: {}", path.display())
            })?;
        }

        Ok(translator)
    }

    /// Registered language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    pub fn catalog(&self, language: &str) -> Option<&Catalog> {
        self.catalogs.get(language)
    }

    /// Resolve a translation without the fallback, for tooling that needs
    /// to distinguish "translated" from "falling back".
    pub fn lookup(&self, language: &str, context: &str, source: &str) -> Option<&str> {
        self.catalogs.get(language)?.translate(context, source)
    }

    /// Resolve the display text for `(language, context, source)`.
    pub fn translate<'a>(&'a self, language: &str, context: &str, source: &'a str) -> &'a str {
        self.lookup(language, context, source).unwrap_or(source)
    }
}
