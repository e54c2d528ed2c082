//! Integration tests for structured exit codes.
//!
//! These tests verify that alignak-environment returns the documented exit
//! codes, enabling reliable shell scripting.

mod common;

use common::{alignak_env_cmd, write_config};
use predicates::prelude::*;

/// Test that a valid configuration returns exit code 0.
#[test]
fn test_success_returns_exit_code_0() {
    let (_dir, path) = write_config("[daemon.arbiter-master]\ntype = arbiter\n");
    alignak_env_cmd().arg(&path).assert().code(0);
}

/// Test that a missing configuration file returns exit code 1.
#[test]
fn test_missing_file_returns_exit_code_1() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nope.ini");

    alignak_env_cmd()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "required configuration file does not exist",
        ))
        .stderr(predicate::str::contains("nope.ini"));
}

/// Test that a file without sections returns exit code 2.
#[test]
fn test_bad_format_returns_exit_code_2() {
    let (_dir, path) = write_config("just = a value\n");
    alignak_env_cmd()
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bad formatted configuration file"));
}

/// Test that a zero-byte file returns exit code 2.
#[test]
fn test_empty_file_returns_exit_code_2() {
    let (_dir, path) = write_config("");
    alignak_env_cmd().arg(&path).assert().code(2);
}

/// Test that an unresolved reference returns exit code 3.
#[test]
fn test_missing_variable_returns_exit_code_3() {
    let (_dir, path) = write_config("[a]\nk=%(missing)s\n");
    alignak_env_cmd()
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "incorrect or missing variable 'missing'",
        ));
}

/// Test that malformed lines return exit code 3.
#[test]
fn test_malformed_line_returns_exit_code_3() {
    let (_dir, path) = write_config("[a]\nnot an option\n");
    alignak_env_cmd()
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("parsing error in config file"))
        .stderr(predicate::str::contains("[line  2]: not an option"));
}

/// Test that a missing argument returns exit code 64.
#[test]
fn test_missing_argument_returns_exit_code_64() {
    alignak_env_cmd()
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Command line parsing error"));
}

/// Test that an unknown option returns exit code 64.
#[test]
fn test_unknown_option_returns_exit_code_64() {
    alignak_env_cmd().arg("--bogus").arg("a.ini").assert().code(64);
}

/// Test that help exits successfully and documents the exit codes.
#[test]
fn test_help_returns_exit_code_0() {
    alignak_env_cmd()
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("<CFG_FILE>"))
        .stdout(predicate::str::contains("64  command line parameters"));
}

/// Test that a section name the environment cannot hold returns exit code 3.
#[test]
fn test_equals_in_section_name_returns_exit_code_3() {
    let (_dir, path) = write_config("[daemon=a]\nport = 1\n");
    alignak_env_cmd()
        .arg(&path)
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("* cannot export 'daemon=a.port'"))
        .stderr(predicate::str::contains("variable name contains '='"))
        .stderr(predicate::str::contains("panicked").not());
}

/// Test that a NUL byte in a value returns exit code 3.
#[test]
fn test_nul_in_value_returns_exit_code_3() {
    let (_dir, path) = write_config("[a]\nk = x\u{0}y\n");
    alignak_env_cmd()
        .arg(&path)
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("* cannot export 'a.k'"))
        .stderr(predicate::str::contains("value contains a NUL byte"));
}
