use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, stderr};

#[test]
fn test_import_counts_leaves() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(
        "lang/en/messages.json",
        r#"{ "welcome": "Welcome", "nav": { "home": "Home", "about": "About" } }"#,
    )?;
    test.write_file("lang/fr/messages.json", r#"{ "welcome": "Bienvenue" }"#)?;

    assert_cmd_snapshot!(test.command().arg("import"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Imported 4 translations from 2 group files in 2 locales

    ----- stderr -----
    ");

    // New records differ from their (empty) stored value until exported
    assert_cmd_snapshot!(test.command().args(["list", "messages", "--locale", "fr"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    fr messages.welcome = "Bienvenue" changed
    1 translation, 0 missing

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_import_keeps_edits_without_replace() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("lang/en/messages.json", r#"{ "hello": "Hello" }"#)?;

    test.run(&["import"])?;
    assert_cmd_snapshot!(test.command().args(["edit", "en", "messages", "hello", "Hi there"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Set en:messages.hello = "Hi there"

    ----- stderr -----
    "#);

    test.run(&["import"])?;
    assert_cmd_snapshot!(test.command().args(["list", "messages"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    en messages.hello = "Hi there" changed
    1 translation, 0 missing

    ----- stderr -----
    "#);

    assert_cmd_snapshot!(test.command().args(["import", "--replace"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Imported 1 translation from 1 group file in 1 locale
      existing values were replaced

    ----- stderr -----
    ");
    assert_cmd_snapshot!(test.command().args(["list", "messages"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    en messages.hello = "Hello" changed
    1 translation, 0 missing

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_import_skips_excluded_groups_and_other_files() -> Result<()> {
    let test = CliTest::with_file(
        ".langsyncrc.json",
        r#"{ "dbConnection": "./.langsync/translations.db", "excludeGroups": ["validation"] }"#,
    )?;
    test.write_file("lang/en/messages.json", r#"{ "hello": "Hello" }"#)?;
    test.write_file("lang/en/messages.php", "<?php return ['hello' => 'Hello'];")?;
    test.write_file("lang/en/validation.json", r#"{ "required": "Required" }"#)?;

    assert_cmd_snapshot!(test.command().arg("import"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Imported 1 translation from 1 group file in 1 locale

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.command().args(["list", "validation"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    No translations found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_import_reports_malformed_file() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("lang/en/broken.json", "{ not json")?;

    let output = test.run(&["import"])?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr(&output);
    assert!(stderr.contains("Import failed"));
    assert!(stderr.contains("Failed to load 'broken' for locale 'en'"));

    Ok(())
}
