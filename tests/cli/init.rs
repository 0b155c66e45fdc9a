use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _stderr) = run(test.command().arg("init"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Created .lingotrc.json"));
    assert!(test.root().join(".lingotrc.json").exists());

    let content = test.read_file(".lingotrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;

    assert!(parsed.get("catalogsRoot").is_some());
    assert!(parsed.get("sourceLanguage").is_some());
    assert!(parsed.get("ignores").is_some());

    insta::assert_snapshot!(content, @r#"
    {
      "ignores": [],
      "catalogsRoot": "./translations",
      "sourceLanguage": "en"
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingotrc.json", "{}")?;

    let (code, _stdout, stderr) = run(test.command().arg("init"))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("already exists"));

    Ok(())
}
