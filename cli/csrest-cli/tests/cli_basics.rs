// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, argument and config errors.
//!
//! None of these reach a team server.

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]
// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// `csrest` with an empty config dir and no connection env vars.
fn csrest_cmd(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("csrest").expect("Failed to find csrest binary");
    cmd.env("CSREST_CONFIG_DIR", config_dir)
        .env_remove("CSREST_HOST")
        .env_remove("CSREST_PORT")
        .env_remove("CSREST_USER")
        .env_remove("CSREST_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_csrest_version() {
    let dir = tempfile::tempdir().unwrap();
    csrest_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("csrest"));
}

#[test]
fn test_csrest_help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    csrest_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("beacons"))
        .stdout(predicate::str::contains("shell"))
        .stdout(predicate::str::contains("wait"));
}

#[test]
fn test_shell_help_shows_wait_options() {
    let dir = tempfile::tempdir().unwrap();
    csrest_cmd(dir.path())
        .args(["shell", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--wait"))
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
fn test_shell_requires_bid_and_command() {
    let dir = tempfile::tempdir().unwrap();
    csrest_cmd(dir.path())
        .args(["shell", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_port_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    csrest_cmd(dir.path())
        .args(["--port", "notaport", "beacons"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_username_fails_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    csrest_cmd(dir.path())
        .args(["--host", "127.0.0.1", "beacons"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No username configured"));
}

#[test]
fn test_malformed_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ nope").unwrap();
    csrest_cmd(dir.path())
        .arg("beacons")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
