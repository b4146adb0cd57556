#![allow(deprecated)] // TODO: migrate Command::cargo_bin to the cargo_bin! macro

use assert_cmd::Command;
use predicates::prelude::*;

/// Every action flag shows up in the help text.
#[test]
fn test_help_lists_action_flags() {
    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--plan-only"))
        .stdout(predicate::str::contains("--deploy"))
        .stdout(predicate::str::contains("--destroy"))
        .stdout(predicate::str::contains("--create-backend"));
}

/// The help text documents the implicit deploy default.
#[test]
fn test_help_documents_deploy_default() {
    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("default when no action flag"));
}

#[test]
fn test_version_prints_package_version() {
    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"));
}

/// Outside a project there is no configuration file; the run must fail
/// with the delimited error banner instead of a stack trace.
#[test]
fn test_fails_outside_a_project() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("STRATA_CONFIG")
        .arg("--plan-only")
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR: Completed Unsuccessfully"))
        .stdout(predicate::str::contains("no configuration file found"));
}

/// Destroy is deliberately unimplemented and must fail fast rather
/// than silently succeed.
#[test]
fn test_destroy_is_an_explicit_error() {
    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.arg("--destroy")
        .assert()
        .failure()
        .stdout(predicate::str::contains("destroy is not implemented"));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.arg("--frobnicate").assert().failure();
}
