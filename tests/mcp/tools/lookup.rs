use lingot::mcp::{LingotMcpServer, types::LookupTranslationParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{DE_CATALOG, FR_CATALOG, McpTestFixture, extract_tool_result_json};

fn params(
    fixture: &McpTestFixture,
    language: &str,
    context: &str,
    source: &str,
) -> Parameters<LookupTranslationParams> {
    Parameters(LookupTranslationParams {
        project_root_path: fixture.root(),
        language: language.to_string(),
        context: context.to_string(),
        source: source.to_string(),
    })
}

#[tokio::test]
async fn test_lookup_finds_translation() {
    let fixture =
        McpTestFixture::with_catalogs(vec![("de", DE_CATALOG), ("fr", FR_CATALOG)]).unwrap();
    let server = LingotMcpServer::new();

    let result = server
        .lookup_translation(params(&fixture, "fr", "SceneComposer", "Delete Actor"))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["translation"], "Supprimer l'acteur");
    assert_eq!(json_result["found"], true);

    let result = server
        .lookup_translation(params(&fixture, "de", "SceneComposer", "Delete Actor"))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["translation"], "Akteur löschen");
}

#[tokio::test]
async fn test_lookup_falls_back_to_source() {
    let fixture = McpTestFixture::with_catalogs(vec![("fr", FR_CATALOG)]).unwrap();
    let server = LingotMcpServer::new();

    // Empty translation, unknown context, unknown language: all fall back.
    for (language, context, source) in [
        ("fr", "SceneComposer", "Rename Actor"),
        ("fr", "UnknownDialog", "Delete Actor"),
        ("ja", "SceneComposer", "Delete Actor"),
    ] {
        let result = server
            .lookup_translation(params(&fixture, language, context, source))
            .await
            .unwrap();
        let json_result = extract_tool_result_json(&result);

        assert_eq!(json_result["translation"], source);
        assert_eq!(json_result["found"], false);
    }
}
