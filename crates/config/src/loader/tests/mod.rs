//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test path handling and file-system failures.
//! - Test structural and line-level parse failures.
//! - Test interpolation against sections and the default section.
//!
//! Invariants:
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};

pub mod interpolation_tests;

/// Write `content` to `name` inside `dir` and return the file path.
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
