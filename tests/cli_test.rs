//! Integration tests for the flrun CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn cli_no_args_prints_usage_and_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("flrun"));
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_multiple_scripts_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("flrun"));
    cmd.args(["a.py", "b.py"]);
    cmd.assert().failure().code(2);
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("flrun"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("FontLab Studio"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("flrun"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_missing_script_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("flrun"));
    cmd.arg(temp.path().join("missing.py"));
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn cli_locate_prints_descriptor() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("flrun"));
    cmd.arg("--locate");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("platform:"))
        .stdout(predicate::str::contains("invocation:"));
    Ok(())
}

#[test]
fn cli_locate_json_is_valid() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("flrun"));
    cmd.args(["--locate", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&output)?;
    assert!(json.get("found").is_some());
    assert!(json.get("platform").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("invocation").is_some());
    Ok(())
}

#[test]
fn cli_json_without_locate_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("flrun"));
    cmd.args(["--json", "a.py"]);
    cmd.assert().failure().code(2);
    Ok(())
}

// The end-to-end fallback flow only applies where FontLab Studio is
// unsupported (the locator reports not-found and the fallback artifact is
// written); on Windows and macOS the tool would try to launch something.
#[cfg(all(unix, not(target_os = "macos")))]
mod unsupported_platform {
    use super::*;

    #[test]
    fn cli_fallback_writes_artifact_with_instructions(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let script = temp.path().join("script.py");
        fs::write(&script, "print(\"hi\")\n")?;
        let fallback_dir = temp.path().join("home");
        fs::create_dir_all(&fallback_dir)?;

        let mut cmd = Command::new(cargo_bin("flrun"));
        cmd.arg(&script);
        cmd.args(["--fallback-dir", fallback_dir.to_str().unwrap()]);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("RunThisInFLS.flw"))
            .stdout(predicate::str::contains(
                "Drag that file onto the FontLab Studio window or icon",
            ));

        let artifact = fallback_dir.join("RunThisInFLS.flw");
        let contents = fs::read_to_string(&artifact)?;
        assert!(contents.contains("print(\"hi\")"));
        assert!(contents.contains("os.remove(__tmpfile__)"));
        Ok(())
    }

    #[test]
    fn cli_no_fallback_fails() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let script = temp.path().join("script.py");
        fs::write(&script, "print(\"hi\")\n")?;

        let mut cmd = Command::new(cargo_bin("flrun"));
        cmd.arg(&script);
        cmd.arg("--no-fallback");
        cmd.assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("could not be located"));
        Ok(())
    }
}
