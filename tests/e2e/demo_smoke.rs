//! Demo binary E2E smoke tests.

use std::io;
use std::process::{Command, Output};

fn run_demo(args: &[&str]) -> io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_lrd"))
        .args(args)
        .env_remove("LRD_LOG")
        .output()
}

fn stdout_of(args: &[&str]) -> io::Result<String> {
    let output = run_demo(args)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(io::Error::other(format!("lrd {args:?} failed: {stderr}")));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[test]
fn default_invocation_prints_reference_result() -> io::Result<()> {
    assert_eq!(stdout_of(&[])?, "ok{10}\n");
    Ok(())
}

#[test]
fn scenarios_all_pass() -> io::Result<()> {
    let stdout = stdout_of(&["scenarios"])?;

    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.lines().all(|line| line.starts_with("pass ")));
    Ok(())
}

#[test]
fn scenarios_json_is_deterministic() -> io::Result<()> {
    let first = stdout_of(&["scenarios", "--output", "json"])?;
    let second = stdout_of(&["scenarios", "--output", "json"])?;

    assert_eq!(first, second, "scenario output should be deterministic");
    let value: serde_json::Value = serde_json::from_str(&first).map_err(io::Error::other)?;
    assert_eq!(value["status"], "ok");
    Ok(())
}
