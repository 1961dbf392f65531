//! Tests for the one-shot CLI commands, run against the real binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn emojishelf_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_emojishelf"));
    cmd.arg("--config")
        .arg(dir.join("config.toml"))
        .arg("--prefs")
        .arg(dir.join("preferences.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn run(dir: &Path, args: &[&str]) -> Output {
    emojishelf_cmd(dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_lists_subcommands() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("show"));
    assert!(stdout.contains("reset"));
    assert!(stdout.contains("--prefs"));
}

#[test]
fn test_show_prints_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["show"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("isDarkTheme = false"));
    assert!(stdout.contains("isLinearLayout = true"));
}

#[test]
fn test_set_persists_across_processes() {
    let temp_dir = TempDir::new().unwrap();
    assert!(run(temp_dir.path(), &["set", "theme", "dark"]).status.success());
    assert!(run(temp_dir.path(), &["set", "layout", "grid"]).status.success());

    let output = run(temp_dir.path(), &["show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("isDarkTheme = true"));
    assert!(stdout.contains("isLinearLayout = false"));
}

#[test]
fn test_reset_restores_defaults() {
    let temp_dir = TempDir::new().unwrap();
    assert!(run(temp_dir.path(), &["set", "theme", "dark"]).status.success());
    assert!(run(temp_dir.path(), &["reset"]).status.success());

    let output = run(temp_dir.path(), &["show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("isDarkTheme = false"));
}

#[test]
fn test_invalid_value_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["set", "theme", "purple"]);
    assert!(!output.status.success());
    assert!(!temp_dir.path().join("preferences.toml").exists());
}
