//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define the documented exit codes of `alignak-environment`.
//! - Map `ConfigError` variants to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by the error `Display` impls).
//!
//! Invariants:
//! - Codes 1, 2, 3 and 64 are part of the public contract of the tool.
//! - Code 74 (sysexits EX_IOERR) is used when stdout cannot be written.

use alignak_config::ConfigError;

/// Structured exit codes for alignak-environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the configuration was parsed and exported.
    Success = 0,

    /// The configuration file does not exist.
    FileNotFound = 1,

    /// The configuration file is not correctly formatted (or cannot be read).
    BadFormat = 2,

    /// A line could not be parsed, a `%(name)s` reference is invalid, or a
    /// resolved variable cannot be exported.
    InvalidContent = 3,

    /// Command line parameters are not used correctly (sysexits EX_USAGE).
    Usage = 64,

    /// Writing the exports failed (sysexits EX_IOERR).
    IoError = 74,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingConfigPath => ExitCode::Usage,
            ConfigError::FileNotFound { .. } => ExitCode::FileNotFound,
            ConfigError::Read { .. } | ConfigError::BadFormat { .. } => ExitCode::BadFormat,
            ConfigError::Parse { .. }
            | ConfigError::MissingReference { .. }
            | ConfigError::InterpolationDepth { .. }
            | ConfigError::InterpolationSyntax { .. }
            | ConfigError::InvalidEnvironmentVariable { .. } => ExitCode::InvalidContent,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns `ExitCode::IoError` if no `ConfigError` is found in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::IoError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::FileNotFound.as_i32(), 1);
        assert_eq!(ExitCode::BadFormat.as_i32(), 2);
        assert_eq!(ExitCode::InvalidContent.as_i32(), 3);
        assert_eq!(ExitCode::Usage.as_i32(), 64);
        assert_eq!(ExitCode::IoError.as_i32(), 74);
    }

    #[test]
    fn test_config_error_mapping() {
        let path = PathBuf::from("/tmp/a.ini");
        assert_eq!(
            ExitCode::from(&ConfigError::FileNotFound { path: path.clone() }),
            ExitCode::FileNotFound
        );
        assert_eq!(
            ExitCode::from(&ConfigError::BadFormat { path: path.clone() }),
            ExitCode::BadFormat
        );
        assert_eq!(
            ExitCode::from(&ConfigError::MissingReference {
                path: path.clone(),
                section: "a".to_string(),
                option: "k".to_string(),
                reference: "missing".to_string(),
            }),
            ExitCode::InvalidContent
        );
        assert_eq!(
            ExitCode::from(&ConfigError::InvalidEnvironmentVariable {
                path: path.clone(),
                name: "a=b.k".to_string(),
                reason: "variable name contains '='",
            }),
            ExitCode::InvalidContent
        );
        assert_eq!(
            ExitCode::from(&ConfigError::Parse {
                path,
                lines: Vec::new()
            }),
            ExitCode::InvalidContent
        );
        assert_eq!(
            ExitCode::from(&ConfigError::MissingConfigPath),
            ExitCode::Usage
        );
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = Err::<(), _>(ConfigError::BadFormat {
            path: PathBuf::from("/tmp/a.ini"),
        })
        .context("loading configuration")
        .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::BadFormat);
    }

    #[test]
    fn test_other_errors_are_io_errors() {
        let err = anyhow::Error::new(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(err.exit_code(), ExitCode::IoError);
    }
}
