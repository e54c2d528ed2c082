//! Configuration resolution for the Alignak environment.
//!
//! This crate loads a sectioned `.ini` style configuration file (default
//! section, `%(name)s` interpolation), answers typed queries over its daemon,
//! module and monitoring sections, and projects every resolved key into
//! environment variables or shell `export` statements.

pub mod constants;
mod loader;
pub mod projection;
mod resolver;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, MalformedLine};
pub use projection::{ResolvedEnvironment, ShellExport};
pub use resolver::{DaemonSelection, ModuleSelection, Resolver};
pub use types::{
    ConfigurationDocument, DaemonSpec, ModuleSpec, MonitoringConfiguration, Properties, Section,
    SectionFamily, SectionKind,
};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
