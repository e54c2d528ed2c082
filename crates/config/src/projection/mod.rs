//! Projection of a resolved document into environment variables.
//!
//! Responsibilities:
//! - Flatten every `section.key` into an ordered name/value mapping.
//! - Optionally write that mapping into the process environment.
//! - Render the mapping as shell `export` statements (see `shell.rs`).
//!
//! Does NOT handle:
//! - Deciding whether the process environment should be touched; that is the
//!   caller's choice (the CLI does, library hosts usually should not).
//!
//! Invariants:
//! - Composite names keep their dot: `daemon.arbiter.port`.
//! - The default section is only projected through the sections inheriting it.

mod shell;

pub use shell::{ShellExport, export_statement, sanitize_name, shell_quote, version_export};

use std::path::{Path, PathBuf};

use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::loader::ConfigError;
use crate::types::ConfigurationDocument;

/// Every resolved `section.key` with its value, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedEnvironment {
    path: PathBuf,
    vars: Vec<(String, String)>,
}

impl ResolvedEnvironment {
    pub(crate) fn from_document(document: &ConfigurationDocument) -> Self {
        let vars = document
            .sections()
            .iter()
            .flat_map(|section| {
                section.properties.iter().map(move |(key, value)| {
                    (format!("{}.{}", section.name, key), value.to_string())
                })
            })
            .collect();
        Self {
            path: document.path().to_path_buf(),
            vars,
        }
    }

    /// The configuration file the variables were resolved from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, composite: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(name, _)| name == composite)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Consume the mapping into `export NAME=value` statements.
    pub fn into_exports(self) -> ShellExport {
        ShellExport::new(self.vars)
    }

    /// Write every composite name into the process environment.
    ///
    /// Every variable is checked first, so either all of them are written or
    /// none is. There is no way to undo this.
    ///
    /// # Errors
    ///
    /// `InvalidEnvironmentVariable` if a name is empty or holds `=` or NUL, or
    /// if a value holds NUL.
    ///
    /// # Safety
    ///
    /// Mutating the process environment races with any other thread reading or
    /// writing it. The caller must ensure no other thread does so for the
    /// duration of the call (in practice: call it from `main` before spawning
    /// threads, once per process).
    pub unsafe fn apply_to_process_env(&self) -> Result<(), ConfigError> {
        for (name, value) in &self.vars {
            self.check_variable(name, value)?;
        }
        for (name, value) in &self.vars {
            debug!(name = %name, "setting environment variable");
            // SAFETY: forwarded to the caller, see the function contract.
            unsafe { std::env::set_var(name, value) };
        }
        Ok(())
    }

    fn check_variable(&self, name: &str, value: &str) -> Result<(), ConfigError> {
        let reason = if name.is_empty() {
            "empty variable name"
        } else if name.contains('=') {
            "variable name contains '='"
        } else if name.contains('\0') {
            "variable name contains a NUL byte"
        } else if value.contains('\0') {
            "value contains a NUL byte"
        } else {
            return Ok(());
        };
        Err(ConfigError::InvalidEnvironmentVariable {
            path: self.path.clone(),
            name: name.to_string(),
            reason,
        })
    }
}

impl Serialize for ResolvedEnvironment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
