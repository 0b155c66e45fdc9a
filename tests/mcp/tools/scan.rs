use lingot::mcp::{LingotMcpServer, types::ScanIssuesParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{FR_CATALOG, McpTestFixture, extract_tool_result_json};

fn params(fixture: &McpTestFixture, rules: Option<Vec<&str>>) -> Parameters<ScanIssuesParams> {
    Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
        rules: rules.map(|r| r.into_iter().map(str::to_string).collect()),
        limit: None,
        offset: None,
    })
}

#[tokio::test]
async fn test_scan_all_rules() {
    let fixture = McpTestFixture::with_catalogs(vec![("fr", FR_CATALOG)]).unwrap();
    let server = LingotMcpServer::new();

    let result = server.scan_issues(params(&fixture, None)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    // "Rename Actor" is untranslated, "Save %1?" drops its placeholder.
    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(json_result["errorCount"], 2);

    let items = json_result["items"].as_array().unwrap();
    let rules: Vec<&str> = items.iter().map(|i| i["rule"].as_str().unwrap()).collect();
    assert!(rules.contains(&"untranslated"));
    assert!(rules.contains(&"placeholder-mismatch"));
    assert!(items[0]["path"].as_str().unwrap().ends_with("fr.ts"));
}

#[tokio::test]
async fn test_scan_rule_filter() {
    let fixture = McpTestFixture::with_catalogs(vec![("fr", FR_CATALOG)]).unwrap();
    let server = LingotMcpServer::new();

    let result = server
        .scan_issues(params(&fixture, Some(vec!["placeholders"])))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["rule"], "placeholder-mismatch");
}

#[tokio::test]
async fn test_scan_unknown_rule_is_invalid_params() {
    let fixture = McpTestFixture::with_catalogs(vec![("fr", FR_CATALOG)]).unwrap();
    let server = LingotMcpServer::new();

    let result = server.scan_issues(params(&fixture, Some(vec!["bogus"]))).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_scan_pagination() {
    let fixture = McpTestFixture::with_catalogs(vec![("fr", FR_CATALOG)]).unwrap();
    let server = LingotMcpServer::new();

    let result = server
        .scan_issues(Parameters(ScanIssuesParams {
            project_root_path: fixture.root(),
            rules: None,
            limit: Some(1),
            offset: Some(0),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 1);
    assert_eq!(json_result["pagination"]["hasMore"], true);
}
