//! Shared test utilities for alignak-environment integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Write configuration fixtures to temporary directories.
//!
//! Invariants / Assumptions:
//! - `ALIGNAK_CONFIGURATION_FILE` and `RUST_LOG` never leak in from the host.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `alignak-environment` command for integration testing.
pub fn alignak_env_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("alignak-environment");

    // Clear potential host leakage
    cmd.env_remove("ALIGNAK_CONFIGURATION_FILE")
        .env_remove("RUST_LOG");

    cmd
}

/// Writes `content` as `alignak.ini` in a fresh temporary directory.
///
/// The directory must be kept alive for as long as the file is used.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("alignak.ini");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
