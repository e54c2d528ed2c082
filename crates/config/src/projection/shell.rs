//! Shell `export` statement formatting.
//!
//! Responsibilities:
//! - Turn composite `section.key` names into valid shell variable names.
//! - Quote values so a POSIX shell reads back exactly the original string.
//!
//! Invariants:
//! - Sanitized names only contain `[A-Z0-9_]`; distinct names may collide.
//! - Quoted values never expand variables, globs or command substitutions.

use crate::constants::{ALIGNAK_VERSION, VERSION_VARIABLE};

/// Replace every character outside `[0-9A-Za-z_]` with `_` and upper-case the result.
pub fn sanitize_name(composite: &str) -> String {
    composite
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "@%_-+=:,./".contains(c)
}

/// Quote a value for a POSIX shell.
///
/// Values made only of safe characters are left bare; anything else is
/// wrapped in single quotes, with embedded single quotes written as `'"'"'`.
pub fn shell_quote(value: &str) -> String {
    if value.is_empty() {
        return "''".to_string();
    }
    if value.chars().all(is_safe) {
        return value.to_string();
    }
    format!("'{}'", value.replace('\'', "'\"'\"'"))
}

/// `export NAME=value` for one composite name.
pub fn export_statement(composite: &str, value: &str) -> String {
    format!("export {}={}", sanitize_name(composite), shell_quote(value))
}

/// `export ALIGNAK_VERSION=<version>`.
pub fn version_export() -> String {
    format!("export {VERSION_VARIABLE}={}", shell_quote(ALIGNAK_VERSION))
}

/// Lazy, single-pass sequence of export statements.
#[derive(Debug)]
pub struct ShellExport {
    vars: std::vec::IntoIter<(String, String)>,
}

impl ShellExport {
    pub(crate) fn new(vars: Vec<(String, String)>) -> Self {
        Self {
            vars: vars.into_iter(),
        }
    }
}

impl Iterator for ShellExport {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.vars
            .next()
            .map(|(name, value)| export_statement(&name, &value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.vars.size_hint()
    }
}

impl ExactSizeIterator for ShellExport {}
