//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every way loading a configuration file can fail.
//! - Report resolved values that the process environment cannot hold.
//! - Carry the absolute file path and, where relevant, the section and key.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the CLI crate).
//!
//! Invariants:
//! - Absence of data is never an error; only loading can fail.
//! - `MissingReference` always names the unresolved reference, not the option holding it.

use std::path::PathBuf;
use thiserror::Error;

/// A line of the configuration file that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number.
    pub number: usize,
    /// The line as written, without its line terminator.
    pub content: String,
}

/// Errors that can occur while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing configuration file name")]
    MissingConfigPath,

    #[error("required configuration file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("unable to read configuration file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bad formatted configuration file: {}", path.display())]
    BadFormat { path: PathBuf },

    #[error("parsing error in config file: {}\n{}", path.display(), describe_lines(lines))]
    Parse {
        path: PathBuf,
        lines: Vec<MalformedLine>,
    },

    #[error(
        "incorrect or missing variable '{reference}' in config file: {} (section '{section}', option '{option}')",
        path.display()
    )]
    MissingReference {
        path: PathBuf,
        section: String,
        option: String,
        reference: String,
    },

    #[error(
        "interpolation too deep for option '{option}' in section '{section}' of config file: {}",
        path.display()
    )]
    InterpolationDepth {
        path: PathBuf,
        section: String,
        option: String,
    },

    #[error(
        "bad interpolation syntax for option '{option}' in section '{section}' of config file: {}: {message}",
        path.display()
    )]
    InterpolationSyntax {
        path: PathBuf,
        section: String,
        option: String,
        message: String,
    },

    #[error(
        "cannot export '{name}' to the environment ({reason}) from config file: {}",
        path.display()
    )]
    InvalidEnvironmentVariable {
        path: PathBuf,
        name: String,
        reason: &'static str,
    },
}

impl ConfigError {
    /// Returns true for failures caused by `%(name)s` references.
    pub fn is_interpolation(&self) -> bool {
        matches!(
            self,
            ConfigError::MissingReference { .. }
                | ConfigError::InterpolationDepth { .. }
                | ConfigError::InterpolationSyntax { .. }
        )
    }
}

fn describe_lines(lines: &[MalformedLine]) -> String {
    lines
        .iter()
        .map(|line| format!("\t[line {:2}]: {}", line.number, line.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_lists_every_line() {
        let err = ConfigError::Parse {
            path: PathBuf::from("/etc/alignak/alignak.ini"),
            lines: vec![
                MalformedLine {
                    number: 3,
                    content: "no separator".to_string(),
                },
                MalformedLine {
                    number: 12,
                    content: "  orphan".to_string(),
                },
            ],
        };
        let message = err.to_string();
        assert!(message.starts_with("parsing error in config file: /etc/alignak/alignak.ini"));
        assert!(message.contains("[line  3]: no separator"));
        assert!(message.contains("[line 12]:   orphan"));
    }

    #[test]
    fn test_missing_reference_names_the_reference() {
        let err = ConfigError::MissingReference {
            path: PathBuf::from("/tmp/a.ini"),
            section: "a".to_string(),
            option: "k".to_string(),
            reference: "missing".to_string(),
        };
        assert!(err.is_interpolation());
        assert!(
            err.to_string()
                .starts_with("incorrect or missing variable 'missing' in config file: /tmp/a.ini")
        );
    }

    #[test]
    fn test_structural_errors_are_not_interpolation() {
        let err = ConfigError::BadFormat {
            path: PathBuf::from("/tmp/a.ini"),
        };
        assert!(!err.is_interpolation());
        assert_eq!(
            err.to_string(),
            "bad formatted configuration file: /tmp/a.ini"
        );
    }
}
