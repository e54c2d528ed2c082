//! Configuration type definitions for the Alignak environment.
//!
//! Responsibilities:
//! - Define the resolved document, its sections and the ordered `Properties` map.
//! - Define the tagged entities (daemons, modules, monitoring configuration)
//!   derived from section-name conventions.
//!
//! Does NOT handle:
//! - Parsing files or resolving interpolation (see `loader` module).
//! - Answering queries over the document (see `resolver` module).

mod document;
mod entities;
mod properties;

pub use document::{ConfigurationDocument, Section, SectionFamily};
pub use entities::{DaemonSpec, ModuleSpec, MonitoringConfiguration, SectionKind};
pub(crate) use entities::split_module_list;
pub use properties::Properties;
