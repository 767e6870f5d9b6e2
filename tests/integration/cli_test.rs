//! Integration tests for the qstories CLI

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{fixture, temp_config};

/// qstories command isolated from the user's config and logs.
fn qstories(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("qstories").expect("binary should build");
    cmd.env("QSTORIES_CONFIG", config).env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (_dir, config) = temp_config("");
    qstories(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("post"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn play_help_documents_flags() {
    let (_dir, config) = temp_config("");
    qstories(&config)
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--user"))
        .stdout(predicate::str::contains("--offline"))
        .stdout(predicate::str::contains("[FILE]"));
}

// ============================================================================
// list
// ============================================================================

#[test]
fn list_prints_groups_from_file() {
    let (_dir, config) = temp_config("");
    qstories(&config)
        .arg("list")
        .arg(fixture("feed.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("@amina  2 stories (1 unviewed)"))
        .stdout(predicate::str::contains("@chebet  2 stories (1 unviewed)"))
        .stdout(predicate::str::contains("baraka").not());
}

#[test]
fn list_writes_log_file() {
    let (dir, config) = temp_config("");
    qstories(&config)
        .arg("list")
        .arg(fixture("viewed.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("@dalia  1 story"));
    assert!(dir.path().join("qstories.log").exists());
}

#[test]
fn list_missing_file_fails() {
    let (_dir, config) = temp_config("");
    qstories(&config)
        .args(["list", "/nonexistent/feed.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read story feed"));
}

// ============================================================================
// play
// ============================================================================

#[test]
fn play_unknown_user_fails_before_opening_terminal() {
    let (_dir, config) = temp_config("");
    qstories(&config)
        .arg("play")
        .arg(fixture("feed.json"))
        .args(["--user", "zawadi", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No stories from 'zawadi'"));
}

// ============================================================================
// post
// ============================================================================

#[test]
fn post_rejects_invalid_color() {
    let (_dir, config) = temp_config("");
    qstories(&config)
        .args(["post", "--caption", "hi", "--background", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid background color"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_honors_env() {
    let (_dir, config) = temp_config("");
    qstories(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(config.display().to_string()));
}

#[test]
fn config_show_merges_file_with_defaults() {
    let (_dir, config) = temp_config("[playback]\nimage_duration_ms = 3000\n");
    qstories(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("image_duration_ms = 3000"))
        .stdout(predicate::str::contains("tick_interval_ms = 50"));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("nested").join("config.toml");

    qstories(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    let written = std::fs::read_to_string(&config).unwrap();
    assert!(written.contains("[playback]"));

    qstories(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn invalid_config_is_reported() {
    let (_dir, config) = temp_config("[playback]\ntick_interval_ms = 0\n");
    qstories(&config)
        .args(["list"])
        .arg(fixture("feed.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("tick_interval_ms"));
}
