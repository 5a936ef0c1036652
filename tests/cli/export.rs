use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_export_writes_nested_json() -> Result<()> {
    let test = CliTest::with_file(
        ".langsyncrc.json",
        r#"{ "dbConnection": "./.langsync/translations.db", "sortKeys": true }"#,
    )?;
    test.write_file(
        "lang/en/messages.json",
        r#"{ "welcome": "Welcome", "nav": { "home": "Home" } }"#,
    )?;

    test.run(&["import"])?;
    test.run(&["edit", "en", "messages", "nav.about", "About"])?;

    assert_cmd_snapshot!(test.command().args(["export", "messages"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Exported 1 group to 1 file

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("lang/en/messages.json")?,
        r#"{
  "nav": {
    "about": "About",
    "home": "Home"
  },
  "welcome": "Welcome"
}
"#
    );

    assert_cmd_snapshot!(test.command().args(["list", "messages"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    en messages.nav.about = "About" saved
    en messages.nav.home = "Home" saved
    en messages.welcome = "Welcome" saved
    3 translations, 0 missing

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_export_all_skips_untranslated_groups() -> Result<()> {
    let test = CliTest::with_config()?;
    test.run(&["add", "empty", "placeholder"])?;
    test.run(&["edit", "fr", "shop", "cart", "Panier"])?;

    assert_cmd_snapshot!(test.command().arg("export"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Exported 1 group to 1 file

    ----- stderr -----
    ");
    assert!(test.root().join("lang/fr/shop.json").exists());
    assert!(!test.root().join("lang/en/empty.json").exists());

    Ok(())
}

#[test]
fn test_export_unknown_group() -> Result<()> {
    let test = CliTest::with_config()?;

    assert_cmd_snapshot!(test.command().args(["export", "nothing"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✘ Nothing to export for 'nothing'

    ----- stderr -----
    ");

    Ok(())
}
