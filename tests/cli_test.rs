#![cfg(feature = "cli")]

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dhcp-qualifier"))
}

#[test]
fn format_prints_canonical_text() {
    cli()
        .args(["format", "-007"])
        .assert()
        .success()
        .stdout("-7\n");
}

#[test]
fn format_rejects_invalid_text() {
    cli()
        .args(["format", "notanumber"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Not a valid integer"));
}

#[test]
fn parse_accepts_other_scripts() {
    cli()
        .args(["parse", " \u{0661}\u{0662} "])
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn parse_rejects_overflow() {
    cli()
        .args(["parse", "2147483648"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid integer text"));
}

#[test]
fn type_prints_integer() {
    cli().arg("type").assert().success().stdout("integer\n");
}

#[test]
fn check_exits_two_when_values_are_invalid() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("values.toml");
    std::fs::write(
        &path,
        "[[values]]\nname = \"mtu\"\ntext = \"1500\"\n\n[[values]]\nname = \"bad\"\ntext = \"1.5\"\n",
    )?;

    cli()
        .arg("check")
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("mtu = 1500"))
        .stdout(predicate::str::contains("1 valid, 1 invalid"));

    Ok(())
}

#[test]
fn check_json_succeeds_when_all_valid() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("values.toml");
    std::fs::write(&path, "[[values]]\nname = \"lease\"\ntext = \" 0600 \"\n")?;

    let output = cli().arg("check").arg(&path).arg("--json").assert().success();
    let report: serde_json::Value = serde_json::from_slice(&output.get_output().stdout)?;
    assert_eq!(report["outcomes"][0]["canonical"], "600");
    assert_eq!(report["invalid_count"], 0);

    Ok(())
}

#[test]
fn check_fails_on_missing_file() {
    cli()
        .args(["check", "does-not-exist.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load values file"));
}
