use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

const CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>AnimationEdit</name>
    <message>
        <source>Save Animation</source>
        <translation>Animation speichern</translation>
    </message>
    <message>
        <source>Remove Keyframe</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Old Entry</source>
        <translation type="vanished">Alter Eintrag</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_stats_text() -> Result<()> {
    let test = CliTest::with_file("translations/de.ts", CATALOG)?;

    let (code, stdout, _stderr) = run(&mut test.stats_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("translations/de.ts (de)"));
    assert!(stdout.contains("messages:     3"));
    assert!(stdout.contains("finished:     1"));
    assert!(stdout.contains("unfinished:   1"));
    assert!(stdout.contains("retired:      1"));
    assert!(stdout.contains("progress:     50.0%"));
    Ok(())
}

#[test]
fn test_stats_json() -> Result<()> {
    let test = CliTest::with_file("translations/de.ts", CATALOG)?;

    let (code, stdout, _stderr) = run(test.stats_command().args(["--format", "json"]))?;

    assert_eq!(code, 0);
    let parsed: Value = serde_json::from_str(&stdout).context("stats output should be JSON")?;
    let catalogs = parsed.as_array().context("expected a JSON array")?;

    assert_eq!(catalogs.len(), 1);
    assert_eq!(catalogs[0]["path"], "translations/de.ts");
    assert_eq!(catalogs[0]["language"], "de");
    assert_eq!(catalogs[0]["messages"], 3);
    assert_eq!(catalogs[0]["finished"], 1);
    assert_eq!(catalogs[0]["retired"], 1);
    Ok(())
}

#[test]
fn test_stats_parse_error_fails() -> Result<()> {
    let test = CliTest::with_file("translations/de.ts", "not xml at all")?;

    let (code, stdout, _stderr) = run(&mut test.stats_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    Ok(())
}
