use anyhow::Result;

use crate::{CliTest, run};

const TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="en">
<context>
    <name>SceneComposer</name>
    <message>
        <location filename="../editor/scenecomposer.cpp" line="+120"/>
        <source>Delete Actor</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <location line="+14"/>
        <source>Duplicate Actor</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;

const TRANSLATED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr">
<context>
    <name>SceneComposer</name>
    <message>
        <source>Delete Actor</source>
        <translation>Supprimer l'acteur</translation>
    </message>
    <message>
        <source>Rename Actor</source>
        <translation>Renommer l'acteur</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_merge_carries_and_vanishes() -> Result<()> {
    let test = CliTest::with_file("template.ts", TEMPLATE)?;
    test.write_file("fr.ts", TRANSLATED)?;

    let (code, stdout, _stderr) = run(test
        .command()
        .args(["merge", "template.ts", "fr.ts", "-o", "merged.ts"]))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Merged into merged.ts"));
    assert!(stdout.contains("carried:  1"));
    assert!(stdout.contains("added:    1"));
    assert!(stdout.contains("vanished: 1"));

    let merged = test.read_file("merged.ts")?;
    // Target language comes from the translated catalog.
    assert!(merged.contains(r#"language="fr""#));
    // Carried translation keeps its text, new entry comes in unfinished,
    // removed entry is kept as vanished.
    assert!(merged.contains("Supprimer l'acteur"));
    assert!(merged.contains(r#"<translation type="unfinished"/>"#));
    assert!(merged.contains(r#"<translation type="vanished">Renommer l'acteur</translation>"#));
    // Location hints follow the template.
    assert!(merged.contains(r#"line="+14""#));
    Ok(())
}

#[test]
fn test_merge_no_obsolete_drops_removed() -> Result<()> {
    let test = CliTest::with_file("template.ts", TEMPLATE)?;
    test.write_file("fr.ts", TRANSLATED)?;

    let (code, _stdout, _stderr) = run(test.command().args([
        "merge",
        "template.ts",
        "fr.ts",
        "-o",
        "merged.ts",
        "--no-obsolete",
    ]))?;

    assert_eq!(code, 0);
    let merged = test.read_file("merged.ts")?;
    assert!(!merged.contains("Renommer l'acteur"));
    Ok(())
}

#[test]
fn test_merge_overwrites_translated_by_default() -> Result<()> {
    let test = CliTest::with_file("template.ts", TEMPLATE)?;
    test.write_file("fr.ts", TRANSLATED)?;

    let (code, _stdout, _stderr) = run(test.command().args(["merge", "template.ts", "fr.ts"]))?;

    assert_eq!(code, 0);
    let merged = test.read_file("fr.ts")?;
    assert!(merged.contains("Duplicate Actor"));
    Ok(())
}

#[test]
fn test_merge_missing_template_fails() -> Result<()> {
    let test = CliTest::with_file("fr.ts", TRANSLATED)?;

    let (code, _stdout, stderr) = run(test.command().args(["merge", "nope.ts", "fr.ts"]))?;

    assert_eq!(code, 2);
    assert!(stderr.contains("template"));
    Ok(())
}
