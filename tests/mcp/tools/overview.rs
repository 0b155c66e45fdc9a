use lingot::mcp::{LingotMcpServer, types::CatalogOverviewParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{DE_CATALOG, FR_CATALOG, McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_overview_counts_catalogs() {
    let fixture =
        McpTestFixture::with_catalogs(vec![("de", DE_CATALOG), ("fr", FR_CATALOG)]).unwrap();
    let server = LingotMcpServer::new();

    let params = Parameters(CatalogOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.catalog_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["sourceLanguage"], "en");

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 2);

    // Sorted discovery order: de.ts before fr.ts
    assert_eq!(catalogs[0]["language"], "de");
    assert_eq!(catalogs[0]["messages"], 1);
    assert_eq!(catalogs[0]["finished"], 1);

    assert_eq!(catalogs[1]["language"], "fr");
    assert_eq!(catalogs[1]["messages"], 3);
    assert_eq!(catalogs[1]["finished"], 2);
    assert_eq!(catalogs[1]["untranslated"], 1);
}

#[tokio::test]
async fn test_overview_respects_config_root() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "catalogsRoot": "./i18n" })).unwrap();

    std::fs::create_dir_all(fixture.root() + "/i18n").unwrap();
    std::fs::write(fixture.root() + "/i18n/de.ts", DE_CATALOG).unwrap();

    let server = LingotMcpServer::new();
    let params = Parameters(CatalogOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.catalog_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogs"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_overview_reports_parse_errors() {
    let fixture = McpTestFixture::with_catalogs(vec![("broken", "<TS><oops>")]).unwrap();
    let server = LingotMcpServer::new();

    let params = Parameters(CatalogOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.catalog_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(json_result["catalogs"].as_array().unwrap().is_empty());
    assert_eq!(json_result["parseErrors"].as_array().unwrap().len(), 1);
}
