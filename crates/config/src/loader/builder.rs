//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that locates, reads and parses a file.
//! - Decide which failure wins (missing path, missing file, structure, lines, interpolation).
//! - Resolve every value eagerly so the returned `Resolver` is infallible.
//!
//! Does NOT handle:
//! - Line-level syntax (delegated to parser.rs).
//! - Reference expansion rules (delegated to interpolation.rs).
//! - Touching the process environment (see `projection`).
//!
//! Invariants / Assumptions:
//! - The configuration path is made absolute before any check.
//! - Existence is checked before reading; a missing file is never a parse error.
//! - A document with no header at all is `BadFormat`, whatever else it contains.
//! - Bytes that are not UTF-8 are replaced, never rejected.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::error::ConfigError;
use super::interpolation::{InterpolationFailure, interpolate};
use super::parser::{RawDocument, parse};
use crate::resolver::Resolver;
use crate::types::{ConfigurationDocument, Properties, Section};

/// Loader that builds a `Resolver` from a configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file to load.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Read, parse and resolve the configuration file.
    ///
    /// # Errors
    ///
    /// - `MissingConfigPath` if no (or an empty) path was given.
    /// - `FileNotFound` if the path does not exist.
    /// - `Read` if the file cannot be read.
    /// - Any error of [`ConfigLoader::load_str`].
    pub fn load(self) -> Result<Resolver, ConfigError> {
        let path = self.absolute_path()?;
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path });
        }

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        debug!(path = %path.display(), bytes = bytes.len(), "read configuration file");

        let text = String::from_utf8_lossy(&bytes);
        if matches!(text, Cow::Owned(_)) {
            warn!(
                path = %path.display(),
                "configuration file is not valid UTF-8, invalid bytes replaced"
            );
        }

        Self::load_str(path, &text)
    }

    /// Parse and resolve configuration text already held in memory.
    ///
    /// `path` is only used to label errors and `imported_from` tags.
    ///
    /// # Errors
    ///
    /// - `BadFormat` if the text has no section header.
    /// - `Parse` listing every malformed line.
    /// - `MissingReference`, `InterpolationDepth` or `InterpolationSyntax`
    ///   for the first value that cannot be resolved.
    pub fn load_str(path: impl Into<PathBuf>, text: &str) -> Result<Resolver, ConfigError> {
        let path = path.into();
        let raw = parse(text);

        if !raw.has_headers {
            return Err(ConfigError::BadFormat { path });
        }
        if !raw.malformed.is_empty() {
            return Err(ConfigError::Parse {
                path,
                lines: raw.malformed,
            });
        }

        let document = resolve(path, raw)?;
        info!(
            path = %document.path().display(),
            sections = document.sections().len(),
            "configuration file parsed"
        );
        Ok(Resolver::new(document))
    }

    fn absolute_path(&self) -> Result<PathBuf, ConfigError> {
        let path = match self.config_path.as_deref() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err(ConfigError::MissingConfigPath),
        };
        std::path::absolute(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn resolve(path: PathBuf, raw: RawDocument) -> Result<ConfigurationDocument, ConfigError> {
    let mut defaults = Properties::new();
    for (key, value) in raw.defaults.iter() {
        // Defaults may reference keys that only real sections define.
        let resolved = match interpolate(value, |name| raw.defaults.get(name)) {
            Ok(resolved) => resolved,
            Err(failure) => {
                warn!(key, ?failure, "default value kept uninterpolated");
                value.to_string()
            }
        };
        defaults.insert(key, resolved);
    }

    let mut sections = Vec::with_capacity(raw.sections.len());
    for section in &raw.sections {
        let own = &section.properties;
        let lookup = |name: &str| own.get(name).or_else(|| raw.defaults.get(name));

        // Default keys come first, an overridden one keeping its default position.
        let mut properties = Properties::new();
        for key in raw.defaults.keys().chain(own.keys()) {
            if properties.contains_key(key) {
                continue;
            }
            let Some(value) = lookup(key) else {
                continue;
            };
            let resolved = interpolate(value, lookup)
                .map_err(|failure| interpolation_error(&path, &section.name, key, failure))?;
            debug!(section = %section.name, key, value = %resolved, "resolved option");
            properties.insert(key, resolved);
        }

        sections.push(Section {
            name: section.name.clone(),
            properties,
        });
    }

    Ok(ConfigurationDocument::new(path, defaults, sections))
}

fn interpolation_error(
    path: &Path,
    section: &str,
    option: &str,
    failure: InterpolationFailure,
) -> ConfigError {
    let path = path.to_path_buf();
    let section = section.to_string();
    let option = option.to_string();
    match failure {
        InterpolationFailure::Missing(reference) => ConfigError::MissingReference {
            path,
            section,
            option,
            reference,
        },
        InterpolationFailure::Depth => ConfigError::InterpolationDepth {
            path,
            section,
            option,
        },
        InterpolationFailure::Syntax(message) => ConfigError::InterpolationSyntax {
            path,
            section,
            option,
            message,
        },
    }
}
