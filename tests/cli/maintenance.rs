use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_clean_removes_untranslated_keys() -> Result<()> {
    let test = CliTest::with_config()?;
    test.run(&["add", "messages", "one", "two"])?;
    test.run(&["edit", "en", "messages", "one", "One"])?;

    assert_cmd_snapshot!(test.command().arg("clean"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Removed 1 untranslated key

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.command().arg("list"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    en messages.one = "One" changed
    1 translation, 0 missing

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_reset_is_dry_run_without_apply() -> Result<()> {
    let test = CliTest::with_config()?;
    test.run(&["add", "messages", "one", "two"])?;

    assert_cmd_snapshot!(test.command().arg("reset"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: would delete 2 translations (use --apply to apply)

    ----- stderr -----
    ");
    assert_cmd_snapshot!(test.command().arg("list"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    en messages.one = <missing> saved
    en messages.two = <missing> saved
    2 translations, 2 missing

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.command().args(["reset", "--apply"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Deleted 2 translations

    ----- stderr -----
    ");
    assert_cmd_snapshot!(test.command().arg("list"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    No translations found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_delete_key_from_all_locales() -> Result<()> {
    let test = CliTest::with_config()?;
    test.run(&["edit", "en", "messages", "hi", "Hi"])?;
    test.run(&["edit", "fr", "messages", "hi", "Salut"])?;

    assert_cmd_snapshot!(test.command().args(["delete", "messages", "hi"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Deleted 'messages.hi' from 2 locales

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.command().args(["delete", "messages", "hi"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✘ No translations found for 'messages.hi'

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_disabled_delete_is_an_error() -> Result<()> {
    let test = CliTest::with_file(
        ".langsyncrc.json",
        r#"{ "dbConnection": "./.langsync/translations.db", "deleteEnabled": false }"#,
    )?;

    assert_cmd_snapshot!(test.command().args(["delete", "messages", "hi"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: 'delete' is disabled in the configuration
    ");

    Ok(())
}

#[test]
fn test_edit_rejects_group_outside_lang_root() -> Result<()> {
    let test = CliTest::with_config()?;

    assert_cmd_snapshot!(test.command().args(["edit", "en", "../../x", "k", "v"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid group name '../../x'
    ");

    Ok(())
}
