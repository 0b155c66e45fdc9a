use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project structure with a translations/ directory.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("translations"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with catalog files
    pub fn with_catalogs(catalogs: Vec<(&str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (name, content) in catalogs {
            fixture.write_catalog(name, content)?;
        }
        Ok(fixture)
    }

    /// Write a catalog file to translations/<name>.ts
    pub fn write_catalog(&self, name: &str, content: &str) -> Result<()> {
        let path = self
            .project_root
            .join("translations")
            .join(format!("{}.ts", name));
        fs::write(&path, content)
            .with_context(|| format!("Failed to write catalog file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .lingotrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".lingotrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

pub const FR_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr">
<context>
    <name>SceneComposer</name>
    <message>
        <source>Delete Actor</source>
        <translation>Supprimer l'acteur</translation>
    </message>
    <message>
        <source>Save %1?</source>
        <translation>Enregistrer ?</translation>
    </message>
    <message>
        <source>Rename Actor</source>
        <translation></translation>
    </message>
</context>
</TS>
"#;

pub const DE_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>SceneComposer</name>
    <message>
        <source>Delete Actor</source>
        <translation>Akteur löschen</translation>
    </message>
</context>
</TS>
"#;

// ============================================================================
// Helpers
// ============================================================================

pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    // Check for errors using is_error field
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    // Extract text from the content
    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
