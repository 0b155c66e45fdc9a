use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Catalog Overview Types (catalog_overview)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOverviewParams {
    /// Absolute path to the project root (directory containing .lingotrc.json)
    pub project_root_path: String,
}

/// Result of catalog_overview operation - statistics only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOverviewResult {
    pub catalogs_root: String,
    pub source_language: String,
    pub catalogs: Vec<CatalogOverview>,
    /// Catalog files that failed to parse.
    pub parse_errors: Vec<String>,
}

/// Translation counters for a single catalog file
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOverview {
    pub path: String,
    pub language: Option<String>,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub untranslated: usize,
    pub retired: usize,
    /// Completion ratio in [0, 1], retired entries excluded.
    pub progress: f64,
}

// ============================================================
// Issue Scan Types (scan_issues)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path to the project root (directory containing .lingotrc.json)
    pub project_root_path: String,
    /// Rules to run: untranslated, unfinished, placeholders, duplicates,
    /// obsolete, consistency. All rules when omitted.
    pub rules: Option<Vec<String>>,
    /// Maximum number of items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip (default 0)
    pub offset: Option<u32>,
}

/// Result of scan_issues operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueScanResult {
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

/// A single catalog issue
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub path: String,
    pub line: usize,
    pub col: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

// ============================================================
// Lookup Types (lookup_translation)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupTranslationParams {
    /// Absolute path to the project root (directory containing .lingotrc.json)
    pub project_root_path: String,
    /// Target language code, as in the catalog's TS language attribute
    pub language: String,
    /// Context name (typically the C++ class name)
    pub context: String,
    /// Source string to resolve
    pub source: String,
}

/// Result of lookup_translation operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupTranslationResult {
    pub language: String,
    pub context: String,
    pub source: String,
    /// Resolved text. Falls back to the source string when no usable
    /// translation exists.
    pub translation: String,
    /// True if a finished, non-empty translation was found.
    pub found: bool,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
