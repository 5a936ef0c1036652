use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created [ROOT]/.langsyncrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".langsyncrc.json")?;
    let config: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(config["langRoot"], "./lang");
    assert_eq!(config["defaultLocale"], "en");
    assert_eq!(config["excludeGroups"], serde_json::json!([]));

    Ok(())
}

#[test]
fn test_init_does_not_overwrite() -> Result<()> {
    let test = CliTest::with_file(".langsyncrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ .langsyncrc.json already exists

    ----- stderr -----
    ");
    assert_eq!(test.read_file(".langsyncrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;
    test.write_file("lang/en/messages.json", r#"{ "hello": "Hello" }"#)?;

    let output = test.run(&["import"])?;
    assert!(
        output.status.success(),
        "Import should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join(".langsync/translations.db").exists());

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
