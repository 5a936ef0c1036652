use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_lookup_resolves_with_replacements() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(
        "lang/en/messages.json",
        r#"{ "greeting": "Hello :name, welcome to :Place" }"#,
    )?;

    assert_cmd_snapshot!(
        test.command().args([
            "lookup",
            "messages.greeting",
            "--with",
            "name=ana",
            "--with",
            "place=home",
        ]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hello ana, welcome to Home

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_lookup_falls_back_and_records_miss() -> Result<()> {
    let test = CliTest::with_file(
        ".langsyncrc.json",
        r#"{ "dbConnection": "./.langsync/translations.db", "defaultLocale": "fr", "fallbackLocale": "en" }"#,
    )?;
    test.write_file("lang/en/messages.json", r#"{ "bye": "Goodbye" }"#)?;

    assert_cmd_snapshot!(test.command().args(["lookup", "messages.bye"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Goodbye

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.command().args(["list", "--missing"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    fr messages.bye = <missing> saved
    1 translation, 1 missing

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_miss_exits_with_failure() -> Result<()> {
    let test = CliTest::with_config()?;

    assert_cmd_snapshot!(test.command().args(["lookup", "messages.unknown", "--no-fallback"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ No translation for 'messages.unknown'

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.command().args(["list", "messages"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    en messages.unknown = <missing> saved
    1 translation, 1 missing

    ----- stderr -----
    ");

    Ok(())
}
