//! Issue types for catalog analysis results.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it: severity, rule, position in the catalog file, the offending
//! catalog line, and human-readable details.

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Untranslated,
    Unfinished,
    PlaceholderMismatch,
    ConflictingDuplicate,
    Obsolete,
    Inconsistent,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::ConflictingDuplicate => write!(f, "conflicting-duplicate"),
            Rule::Obsolete => write!(f, "obsolete"),
            Rule::Inconsistent => write!(f, "inconsistent"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Location
// ============================================================

/// Position of an issue inside a catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLocation {
    /// Path of the catalog file as discovered.
    pub path: String,
    /// 1-based line, points at the `<source>` of the offending message.
    pub line: usize,
    /// 1-based column of the first non-blank character on that line.
    pub col: usize,
}

impl CatalogLocation {
    pub fn new(path: &str, line: usize, col: usize) -> Self {
        Self {
            path: path.to_string(),
            line,
            col,
        }
    }
}

// ============================================================
// Report trait
// ============================================================

/// Everything the reporter needs from an issue.
#[enum_dispatch]
pub trait Report {
    fn severity(&self) -> Severity;
    fn rule(&self) -> Rule;
    fn location(&self) -> &CatalogLocation;
    /// Headline text, quoted by the reporter.
    fn message(&self) -> String;
    /// Extra context printed as a `note:` line.
    fn details(&self) -> Option<String>;
    /// Raw catalog line for the caret display.
    fn source_line(&self) -> Option<&str>;
    /// Suggested followup printed as a `hint:` line.
    fn hint(&self) -> Option<String>;
}

// ============================================================
// Issue types
// ============================================================

/// Message with an empty translation in a finished entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub location: CatalogLocation,
    pub context: String,
    pub source: String,
    pub catalog_line: Option<String>,
}

impl Report for UntranslatedIssue {
    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::Untranslated
    }

    fn location(&self) -> &CatalogLocation {
        &self.location
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn details(&self) -> Option<String> {
        Some(format!("context \"{}\" has no translation for this entry", self.context))
    }

    fn source_line(&self) -> Option<&str> {
        self.catalog_line.as_deref()
    }

    fn hint(&self) -> Option<String> {
        None
    }
}

/// Entry still marked `type="unfinished"` but carrying text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub location: CatalogLocation,
    pub context: String,
    pub source: String,
    pub translation: String,
    pub catalog_line: Option<String>,
}

impl Report for UnfinishedIssue {
    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::Unfinished
    }

    fn location(&self) -> &CatalogLocation {
        &self.location
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "context \"{}\" translates this as \"{}\" but the entry is still marked unfinished",
            self.context, self.translation
        ))
    }

    fn source_line(&self) -> Option<&str> {
        self.catalog_line.as_deref()
    }

    fn hint(&self) -> Option<String> {
        Some("review the translation and remove type=\"unfinished\"".to_string())
    }
}

/// Placeholder tokens differ between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub location: CatalogLocation,
    pub context: String,
    pub source: String,
    pub translation: String,
    /// Placeholders present in the source but not the translation.
    pub missing: Vec<String>,
    /// Placeholders present in the translation but not the source.
    pub extra: Vec<String>,
    pub catalog_line: Option<String>,
}

impl Report for PlaceholderMismatchIssue {
    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::PlaceholderMismatch
    }

    fn location(&self) -> &CatalogLocation {
        &self.location
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("translation drops {}", self.missing.join(", ")));
        }
        if !self.extra.is_empty() {
            parts.push(format!("translation adds {}", self.extra.join(", ")));
        }
        parts.push(format!("in context \"{}\"", self.context));
        Some(parts.join("; "))
    }

    fn source_line(&self) -> Option<&str> {
        self.catalog_line.as_deref()
    }

    fn hint(&self) -> Option<String> {
        None
    }
}

/// Same (context, source) defined twice with different translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingDuplicateIssue {
    pub location: CatalogLocation,
    pub context: String,
    pub source: String,
    pub translation: String,
    /// Line of the entry that wins at lookup time.
    pub first_line: usize,
    pub first_translation: String,
    pub catalog_line: Option<String>,
}

impl Report for ConflictingDuplicateIssue {
    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::ConflictingDuplicate
    }

    fn location(&self) -> &CatalogLocation {
        &self.location
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "context \"{}\" already translates this as \"{}\" at line {}; \"{}\" here is never used",
            self.context, self.first_translation, self.first_line, self.translation
        ))
    }

    fn source_line(&self) -> Option<&str> {
        self.catalog_line.as_deref()
    }

    fn hint(&self) -> Option<String> {
        None
    }
}

/// Vanished/obsolete entry still kept in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteIssue {
    pub location: CatalogLocation,
    pub context: String,
    pub source: String,
    pub catalog_line: Option<String>,
}

impl Report for ObsoleteIssue {
    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::Obsolete
    }

    fn location(&self) -> &CatalogLocation {
        &self.location
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "the string no longer exists in the UI sources of context \"{}\"",
            self.context
        ))
    }

    fn source_line(&self) -> Option<&str> {
        self.catalog_line.as_deref()
    }

    fn hint(&self) -> Option<String> {
        Some("run `lingot strip` to remove retired entries".to_string())
    }
}

/// Same source translated differently in different contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InconsistentIssue {
    pub location: CatalogLocation,
    pub context: String,
    pub source: String,
    pub translation: String,
    pub other_context: String,
    pub other_translation: String,
    pub catalog_line: Option<String>,
}

impl Report for InconsistentIssue {
    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::Inconsistent
    }

    fn location(&self) -> &CatalogLocation {
        &self.location
    }

    fn message(&self) -> String {
        self.source.clone()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "\"{}\" in context \"{}\" but \"{}\" in context \"{}\"",
            self.translation, self.context, self.other_translation, self.other_context
        ))
    }

    fn source_line(&self) -> Option<&str> {
        self.catalog_line.as_deref()
    }

    fn hint(&self) -> Option<String> {
        None
    }
}

/// Catalog file that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub location: CatalogLocation,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn new(path: &str, error: &str) -> Self {
        Self {
            location: CatalogLocation::new(path, 1, 1),
            error: error.to_string(),
        }
    }
}

impl Report for ParseErrorIssue {
    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::ParseError
    }

    fn location(&self) -> &CatalogLocation {
        &self.location
    }

    fn message(&self) -> String {
        format!("Failed to parse: {}", self.error)
    }

    fn details(&self) -> Option<String> {
        None
    }

    fn source_line(&self) -> Option<&str> {
        None
    }

    fn hint(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Issue enum
// ============================================================

/// Any issue a check run can produce.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Untranslated(UntranslatedIssue),
    Unfinished(UnfinishedIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    ConflictingDuplicate(ConflictingDuplicateIssue),
    Obsolete(ObsoleteIssue),
    Inconsistent(InconsistentIssue),
    ParseError(ParseErrorIssue),
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by: file path, line, rule, message. The message comparison
        // keeps output deterministic when several issues land on one line.
        let a = self.location();
        let b = other.location();
        a.path
            .cmp(&b.path)
            .then_with(|| a.line.cmp(&b.line))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
