//! Locale catalog data model.
//!
//! A catalog is the in-memory form of one Qt Linguist TS file: an ordered
//! list of contexts (one per originating UI component), each holding an
//! ordered list of translatable messages. Catalogs are immutable reference
//! data at lookup time; the maintenance commands (`merge`, `strip`) build a
//! new catalog and write it back out.
//!
//! ## Module Structure
//!
//! - `location`: Source-location hints and relative line-offset resolution
//! - `reader`: TS XML parsing with fail-fast diagnostics
//! - `writer`: TS XML serialization
//! - `merge`: lupdate-style re-sync of a translated catalog with a template

pub mod location;
pub mod merge;
pub mod reader;
pub mod writer;

pub use location::Location;
pub use merge::{MergeOptions, MergeOutcome, merge};
pub use reader::{load_catalog, parse_catalog};
pub use writer::{LocationMode, save_catalog, write_catalog};

/// TS container format version written by this tool.
pub const TS_VERSION: &str = "2.1";

/// Translation status of a message, mirroring the `type` attribute of the
/// `<translation>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationStatus {
    /// Translated and up to date (no `type` attribute).
    #[default]
    Finished,
    /// Needs translator attention: newly extracted or outdated.
    Unfinished,
    /// The source string disappeared from the code but the entry was kept
    /// so the translation is not lost.
    Vanished,
    /// Like vanished, written by older Qt tooling.
    Obsolete,
}

impl TranslationStatus {
    /// Parse the `type` attribute value. Returns `None` for unknown values.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(TranslationStatus::Unfinished),
            "vanished" => Some(TranslationStatus::Vanished),
            "obsolete" => Some(TranslationStatus::Obsolete),
            _ => None,
        }
    }

    /// The `type` attribute value to serialize, `None` for finished entries.
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Vanished => Some("vanished"),
            TranslationStatus::Obsolete => Some("obsolete"),
        }
    }

    /// Whether the entry still corresponds to a string in the UI source.
    /// Vanished and obsolete entries are invisible to lookup.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            TranslationStatus::Finished | TranslationStatus::Unfinished
        )
    }
}

/// One translatable unit within a context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Original-language string. May contain placeholder tokens like `%1`.
    pub source: String,
    /// Translated text. Empty when not yet translated.
    pub translation: String,
    pub status: TranslationStatus,
    /// Where the string appears in the UI sources. Maintenance metadata
    /// only; lookup never consults it.
    pub locations: Vec<Location>,
    /// Line in the catalog file where this message starts. Zero for
    /// messages constructed programmatically.
    pub line: usize,
}

impl Message {
    /// The text a renderer should display: the translation when one is
    /// available, otherwise the source string. Never empty unless the
    /// source itself is.
    pub fn resolved_text(&self) -> &str {
        if self.status.is_active() && !self.translation.is_empty() {
            &self.translation
        } else {
            &self.source
        }
    }

    /// Whether this entry needs translator attention.
    pub fn is_translated(&self) -> bool {
        self.status == TranslationStatus::Finished && !self.translation.is_empty()
    }
}

/// A named grouping of messages, one per originating UI component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }

    /// All messages for a source string. Duplicates within a context are
    /// legal (same string extracted from several widgets). The returned
    /// borrows are tied to `self`, not to the query string.
    pub fn find<'a>(&'a self, source: &str) -> impl Iterator<Item = &'a Message> {
        let source = source.to_owned();
        self.messages.iter().filter(move |m| m.source == source)
    }

    /// Resolve a source string to its translation.
    ///
    /// The first active entry with a non-empty translation wins; vanished
    /// and obsolete entries are skipped. Returns `None` when no usable
    /// translation is registered, so the caller can fall back.
    pub fn translate(&self, source: &str) -> Option<&str> {
        self.find(source)
            .find(|m| m.status.is_active() && !m.translation.is_empty())
            .map(|m| m.translation.as_str())
    }
}

/// The full set of contexts/messages for one target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// TS format version from the root element.
    pub version: String,
    /// Target language code (e.g. "en", "de_DE"). Optional in the format.
    pub language: Option<String>,
    pub contexts: Vec<Context>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: TS_VERSION.to_string(),
            language: None,
            contexts: Vec::new(),
        }
    }
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Default::default()
        }
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Resolve `(context, source)` to a translation, without fallback.
    pub fn translate(&self, context: &str, source: &str) -> Option<&str> {
        self.context(context)?.translate(source)
    }

    /// Resolve `(context, source)` with the fallback contract: a missing
    /// context, message, or translation yields the source string itself.
    pub fn tr<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.translate(context, source).unwrap_or(source)
    }

    /// Total number of messages across all contexts.
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// The semantic content of the catalog as `(context, source,
    /// translation)` triples, in document order. Location hints and status
    /// are not part of the triple.
    pub fn triples(&self) -> Vec<(&str, &str, &str)> {
        self.contexts
            .iter()
            .flat_map(|c| {
                c.messages
                    .iter()
                    .map(move |m| (c.name.as_str(), m.source.as_str(), m.translation.as_str()))
            })
            .collect()
    }

    /// Remove vanished/obsolete messages and (unless `keep_locations`) all
    /// location hints, dropping contexts that end up empty. This is the
    /// release-preparation step: the result carries exactly what lookup
    /// needs.
    pub fn strip(&mut self, keep_locations: bool) -> StripOutcome {
        let mut outcome = StripOutcome::default();

        for context in &mut self.contexts {
            let before = context.messages.len();
            context.messages.retain(|m| m.status.is_active());
            outcome.removed_messages += before - context.messages.len();

            if !keep_locations {
                for message in &mut context.messages {
                    outcome.dropped_locations += message.locations.len();
                    message.locations.clear();
                }
            }
        }

        let before = self.contexts.len();
        self.contexts.retain(|c| !c.messages.is_empty());
        outcome.removed_contexts += before - self.contexts.len();

        outcome
    }
}

/// Counts of what [`Catalog::strip`] removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripOutcome {
    pub removed_messages: usize,
    pub removed_contexts: usize,
    pub dropped_locations: usize,
}
