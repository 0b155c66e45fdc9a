use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ValueEnum;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde_json;

use crate::{
    cli::commands::check::{CheckRule, run_checks},
    cli::commands::stats::collect_stats,
    config::{Config, load_config},
    issues::{Issue, Report, Severity},
    scan::{ScanResult, discover_catalogs, load_catalogs},
    translator::Translator,
};

use super::types::{
    CatalogOverview, CatalogOverviewParams, CatalogOverviewResult, IssueItem, IssueScanResult,
    LookupTranslationParams, LookupTranslationResult, Pagination, ScanIssuesParams,
};

#[derive(Clone)]
pub struct LingotMcpServer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LingotMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get per-catalog translation statistics
    #[tool(
        description = "Get translation statistics for every catalog (contexts, messages, finished/unfinished/untranslated counts, progress). Use this first to understand the overall state."
    )]
    pub async fn catalog_overview(
        &self,
        params: Parameters<CatalogOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let (scan, config, root) = load_project(&params.0.project_root_path)?;

        let catalogs: Vec<CatalogOverview> = scan
            .catalogs
            .iter()
            .map(|file| {
                let stats = collect_stats(file);
                CatalogOverview {
                    progress: stats.progress(),
                    path: stats.path,
                    language: stats.language,
                    contexts: stats.contexts,
                    messages: stats.messages,
                    finished: stats.finished,
                    unfinished: stats.unfinished,
                    untranslated: stats.untranslated,
                    retired: stats.retired,
                }
            })
            .collect();

        let overview = CatalogOverviewResult {
            catalogs_root: root.to_string_lossy().to_string(),
            source_language: config.source_language,
            catalogs,
            parse_errors: scan
                .parse_errors
                .iter()
                .map(|i| i.message())
                .collect(),
        };

        to_json_result(&overview)
    }

    /// Scan catalogs for issues
    #[tool(
        description = "Scan translation catalogs for issues (untranslated entries, placeholder mismatches, conflicting duplicates, retired entries, cross-context inconsistencies). Returns paginated list."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let checks = match &params.0.rules {
            Some(names) if !names.is_empty() => parse_rules(names)?,
            _ => CheckRule::all(),
        };

        let (scan, config, _root) = load_project(&params.0.project_root_path)?;

        let mut issues = run_checks(&scan.catalogs, &checks, &config.source_language);
        issues.extend(scan.parse_errors.iter().map(|i| Issue::ParseError(i.clone())));
        issues.sort();

        let total_count = issues.len();
        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();
        let warning_count = total_count - error_count;

        let paginated: Vec<IssueItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(to_issue_item)
            .collect();

        let has_more = offset + paginated.len() < total_count;

        let scan_result = IssueScanResult {
            total_count,
            error_count,
            warning_count,
            items: paginated,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        to_json_result(&scan_result)
    }

    /// Resolve a translation with the runtime fallback contract
    #[tool(
        description = "Resolve a (language, context, source) triple the way the application would at runtime: falls back to the source string when no finished translation exists."
    )]
    pub async fn lookup_translation(
        &self,
        params: Parameters<LookupTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let (scan, _config, _root) = load_project(&p.project_root_path)?;

        let mut translator = Translator::new();
        for file in scan.catalogs {
            if file.catalog.language.is_some() {
                translator.add_catalog(file.catalog).map_err(|e| {
                    McpError::internal_error(format!("Failed to index catalog: {}", e), None)
                })?;
            }
        }

        let found = translator.lookup(&p.language, &p.context, &p.source).is_some();
        let translation = translator.translate(&p.language, &p.context, &p.source);

        let result = LookupTranslationResult {
            translation: translation.to_string(),
            language: p.language,
            context: p.context,
            source: p.source,
            found,
        };

        to_json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for LingotMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Lingot MCP helps AI agents maintain Qt Linguist translation catalogs.\n\n\
                 Available tools:\n\
                 1. catalog_overview - Get per-catalog statistics (messages, progress)\n\
                 2. scan_issues - Get detailed issue list (paginated, filterable by rule)\n\
                 3. lookup_translation - Resolve a (language, context, source) triple with runtime fallback\n\n\
                 Recommended Workflow:\n\
                 1. Use catalog_overview to find catalogs with low progress\n\
                 2. Use scan_issues to list untranslated entries and placeholder mismatches\n\
                 3. Fix errors first (untranslated, placeholder-mismatch), then warnings\n\
                 4. Use lookup_translation to verify what the application will display"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = LingotMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}

fn load_project(project_root: &str) -> Result<(ScanResult, Config, PathBuf), McpError> {
    let root = Path::new(project_root);

    let loaded = load_config(root)
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

    let catalogs_root = root.join(&loaded.config.catalogs_root);
    let ignores = loaded
        .config
        .ignore_patterns()
        .map_err(|e| McpError::internal_error(format!("Invalid config: {}", e), None))?;

    let paths = discover_catalogs(&catalogs_root, &ignores)
        .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;

    Ok((load_catalogs(&paths), loaded.config, catalogs_root))
}

fn parse_rules(names: &[String]) -> Result<Vec<CheckRule>, McpError> {
    names
        .iter()
        .map(|name| {
            CheckRule::from_str(name, true).map_err(|_| {
                McpError::invalid_params(format!("Unknown rule: \"{}\"", name), None)
            })
        })
        .collect()
}

fn to_issue_item(issue: &Issue) -> IssueItem {
    let loc = issue.location();
    IssueItem {
        rule: issue.rule().to_string(),
        severity: issue.severity().to_string(),
        path: loc.path.clone(),
        line: loc.line,
        col: loc.col,
        message: issue.message(),
        details: issue.details(),
        hint: issue.hint(),
    }
}

fn to_json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("JSON serialization failed: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}
