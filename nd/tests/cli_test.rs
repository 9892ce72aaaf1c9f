//! Integration tests for the nd CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Write a config pointing storage at the temp dir
fn write_config(dir: &Path) -> std::path::PathBuf {
    let config_path = dir.join("numduel.yml");
    let contents = format!(
        r#"storage:
  games-dir: {base}/games
  memory-dir: {base}/memory
game:
  start-delay-ms: 0
  round-delay-ms: 0
"#,
        base = dir.display()
    );
    std::fs::write(&config_path, contents).unwrap();
    config_path
}

// ===== Help =====

#[test]
fn test_help_shows_description() {
    let mut cmd = Command::cargo_bin("nd").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Adversarial number guessing duel between two LLM players",
        ));
}

// ===== History =====

#[test]
fn test_history_empty_store() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    let mut cmd = Command::cargo_bin("nd").unwrap();
    cmd.args(["-c", config.to_str().unwrap(), "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No games played yet"));
}

#[test]
fn test_history_json_empty_store() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    let mut cmd = Command::cargo_bin("nd").unwrap();
    cmd.args(["-c", config.to_str().unwrap(), "history", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

// ===== Memory =====

#[test]
fn test_memory_empty_role() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    let mut cmd = Command::cargo_bin("nd").unwrap();
    cmd.args(["-c", config.to_str().unwrap(), "memory", "guesser"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No memories for role: guesser"));
}

#[test]
fn test_memory_unknown_role_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    let mut cmd = Command::cargo_bin("nd").unwrap();
    cmd.args(["-c", config.to_str().unwrap(), "memory", "referee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown role"));
}

// ===== Play =====

#[test]
fn test_play_requires_api_key() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    let mut cmd = Command::cargo_bin("nd").unwrap();
    cmd.env_remove("DEEPSEEK_API_KEY")
        .args(["-c", config.to_str().unwrap(), "play", "--auto"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DEEPSEEK_API_KEY"));
}
