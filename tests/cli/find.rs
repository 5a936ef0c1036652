use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_find_registers_missing_keys() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("lang/en/messages.json", r#"{ "hello": "Hello" }"#)?;
    test.write_file(
        "app/Http/HomeController.php",
        r#"<?php
return [trans('messages.hello'), Trans('messages.goodbye'), @lang("auth.failed")];
"#,
    )?;
    test.write_file(
        "resources/views/home.twig",
        "{{ trans_choice('messages.apples', 3) }}",
    )?;

    test.run(&["import"])?;
    assert_cmd_snapshot!(test.command().arg("find"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Found 4 translation keys in 2 files (3 new)

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.command().args(["list", "--missing"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    en auth.failed = <missing> saved
    en messages.apples = <missing> saved
    en messages.goodbye = <missing> saved
    3 translations, 3 missing

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_find_ignores_non_keys_and_excluded_dirs() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(
        "app/page.php",
        r#"<?php
echo trans('plain sentence without group');
echo $obj->trans('messages.method');
echo my_trans('messages.prefixed');
"#,
    )?;
    test.write_file("storage/cache.php", "<?php trans('messages.cached');")?;

    assert_cmd_snapshot!(test.command().arg("find"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Found 0 translation keys in 1 file (0 new)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_find_keeps_call_nested_in_member_call() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(
        "app/page.php",
        "<?php echo $this->trans('a.' . trans('messages.inner'));",
    )?;

    assert_cmd_snapshot!(test.command().arg("find"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Found 1 translation key in 1 file (1 new)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_find_with_explicit_path() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("modules/a.php", "<?php trans('shop.cart');")?;
    test.write_file("app/b.php", "<?php trans('app.title');")?;

    assert_cmd_snapshot!(test.command().args(["find", "modules"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Found 1 translation key in 1 file (1 new)

    ----- stderr -----
    ");

    Ok(())
}
