//! Document loader for section/key-value configuration files.
//!
//! Responsibilities:
//! - Locate and read the configuration file (`ConfigLoader`).
//! - Parse sections, the default section and continuation lines (`parser`).
//! - Expand `%(name)s` references against the section and the default section (`interpolation`).
//!
//! Does NOT handle:
//! - Queries over the loaded document (see `resolver`).
//! - Environment or shell projection (see `projection`).
//!
//! Invariants / Assumptions:
//! - Loading never mutates process state.
//! - A successfully loaded document contains only resolved values.

mod builder;
mod error;
mod interpolation;
mod parser;

pub use builder::ConfigLoader;
pub use error::{ConfigError, MalformedLine};

#[cfg(test)]
mod tests;
