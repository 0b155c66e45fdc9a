use anyhow::Result;

use crate::{CliTest, run};

const CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr">
<context>
    <name>SceneComposer</name>
    <message>
        <location filename="../editor/scenecomposer.cpp" line="+120"/>
        <source>Delete Actor</source>
        <translation>Supprimer l'acteur</translation>
    </message>
    <message>
        <location line="+14"/>
        <source>Old Action</source>
        <translation type="vanished">Ancienne action</translation>
    </message>
</context>
<context>
    <name>RetiredDialog</name>
    <message>
        <source>Gone</source>
        <translation type="obsolete">Parti</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_strip_removes_retired_and_locations() -> Result<()> {
    let test = CliTest::with_file("fr.ts", CATALOG)?;

    let (code, stdout, _stderr) = run(test.command().args(["strip", "fr.ts", "-o", "out.ts"]))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Stripped out.ts"));
    assert!(stdout.contains("removed 2 message(s), 1 context(s)"));
    assert!(stdout.contains("dropped 1 location hint(s)"));

    let stripped = test.read_file("out.ts")?;
    assert!(stripped.contains("Supprimer l'acteur"));
    assert!(!stripped.contains("<location"));
    assert!(!stripped.contains("vanished"));
    assert!(!stripped.contains("RetiredDialog"));
    Ok(())
}

#[test]
fn test_strip_keep_locations() -> Result<()> {
    let test = CliTest::with_file("fr.ts", CATALOG)?;

    let (code, _stdout, _stderr) = run(test
        .command()
        .args(["strip", "fr.ts", "-o", "out.ts", "--keep-locations"]))?;

    assert_eq!(code, 0);
    let stripped = test.read_file("out.ts")?;
    assert!(stripped.contains(r#"<location filename="../editor/scenecomposer.cpp" line="+120"/>"#));
    assert!(!stripped.contains("Ancienne action"));
    Ok(())
}

#[test]
fn test_strip_overwrites_in_place_by_default() -> Result<()> {
    let test = CliTest::with_file("fr.ts", CATALOG)?;

    let (code, _stdout, _stderr) = run(test.command().args(["strip", "fr.ts"]))?;

    assert_eq!(code, 0);
    let stripped = test.read_file("fr.ts")?;
    assert!(!stripped.contains("obsolete"));
    Ok(())
}
