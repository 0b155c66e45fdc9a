use anyhow::Result;

use crate::{CliTest, run};

const CLEAN_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr">
<context>
    <name>SceneComposer</name>
    <message>
        <source>Delete Actor</source>
        <translation>Supprimer l'acteur</translation>
    </message>
</context>
</TS>
"#;

const DIRTY_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr">
<context>
    <name>SceneComposer</name>
    <message>
        <source>Delete Actor</source>
        <translation></translation>
    </message>
    <message>
        <source>Save %1?</source>
        <translation>Enregistrer ?</translation>
    </message>
    <message>
        <source>Old Action</source>
        <translation type="vanished">Ancienne action</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_check_clean_catalog() -> Result<()> {
    let test = CliTest::with_file("translations/fr.ts", CLEAN_CATALOG)?;

    let (code, stdout, _stderr) = run(&mut test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 catalog - no issues found"));
    Ok(())
}

#[test]
fn test_check_reports_issues() -> Result<()> {
    let test = CliTest::with_file("translations/fr.ts", DIRTY_CATALOG)?;

    let (code, stdout, _stderr) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"Delete Actor\""));
    assert!(stdout.contains("untranslated"));
    assert!(stdout.contains("placeholder-mismatch"));
    assert!(stdout.contains("obsolete"));
    assert!(stdout.contains("translations/fr.ts"));
    Ok(())
}

#[test]
fn test_check_rule_selection() -> Result<()> {
    let test = CliTest::with_file("translations/fr.ts", DIRTY_CATALOG)?;

    let (code, stdout, _stderr) = run(test.check_command().arg("placeholders"))?;

    // The selected placeholders rule emits an error, so the run exits 1
    assert_eq!(code, 1);
    assert!(stdout.contains("placeholder-mismatch"));
    assert!(!stdout.contains("untranslated"));
    assert!(!stdout.contains("obsolete"));
    Ok(())
}

#[test]
fn test_check_warnings_only_exits_zero() -> Result<()> {
    let test = CliTest::with_file("translations/fr.ts", DIRTY_CATALOG)?;

    let (code, stdout, _stderr) = run(test.check_command().arg("obsolete"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("warning: \"Old Action\""));
    Ok(())
}

#[test]
fn test_check_source_language_catalog_skipped() -> Result<()> {
    // An English catalog full of unfinished entries is the normal state for
    // the source language, not an issue.
    let test = CliTest::with_file(
        "translations/en.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="en">
<context>
    <name>SceneComposer</name>
    <message>
        <source>Delete Actor</source>
        <translation></translation>
    </message>
</context>
</TS>
"#,
    )?;

    let (code, stdout, _stderr) = run(&mut test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_check_malformed_catalog() -> Result<()> {
    let test = CliTest::with_file("translations/fr.ts", "<TS version=\"2.1\">\n<context>\n")?;

    let (code, stdout, _stderr) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    Ok(())
}

#[test]
fn test_check_missing_catalogs_root() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _stdout, stderr) = run(&mut test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("does not exist"));
    Ok(())
}

#[test]
fn test_check_config_ignores() -> Result<()> {
    let test = CliTest::with_file("translations/fr.ts", CLEAN_CATALOG)?;
    test.write_file("translations/archive/old.ts", DIRTY_CATALOG)?;
    test.write_file(
        ".lingotrc.json",
        r#"{ "ignores": ["**/archive/**"] }"#,
    )?;

    let (code, stdout, _stderr) = run(&mut test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 catalog - no issues found"));
    Ok(())
}

#[test]
fn test_check_catalogs_root_flag() -> Result<()> {
    let test = CliTest::with_file("i18n/fr.ts", CLEAN_CATALOG)?;

    let (code, stdout, _stderr) =
        run(test.check_command().args(["--catalogs-root", "./i18n"]))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _stderr) = run(test.command().arg("--help"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("check"));
    assert!(stdout.contains("merge"));
    assert!(stdout.contains("strip"));
    Ok(())
}
