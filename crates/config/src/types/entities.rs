//! Tagged entity types derived from section-name conventions.
//!
//! Responsibilities:
//! - Classify a section name once into daemon, module, configuration or other.
//! - Wrap daemon and module sections in typed specs with convenience accessors.
//! - Split the monitoring configuration section on the `cfg` key prefix.
//!
//! Invariants:
//! - Classification matches prefixes only; `xdaemon.a` is `Other`.
//! - `daemon.` and `module.` with nothing after the dot are still classified,
//!   with an empty entity name.

use serde::Serialize;

use super::document::Section;
use super::properties::Properties;
use crate::constants::{
    CFG_KEY_PREFIX, DAEMON_MODULES_KEY, DAEMON_PREFIX, DAEMON_TYPE_KEY, MODULE_PREFIX,
    SECTION_CONFIGURATION,
};

/// Role of a section, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind<'a> {
    /// `daemon.<name>`
    Daemon(&'a str),
    /// `module.<name>`
    Module(&'a str),
    /// `alignak-configuration`
    Configuration,
    Other,
}

impl<'a> SectionKind<'a> {
    pub fn classify(section_name: &'a str) -> Self {
        if let Some(name) = section_name.strip_prefix(DAEMON_PREFIX) {
            SectionKind::Daemon(name)
        } else if let Some(name) = section_name.strip_prefix(MODULE_PREFIX) {
            SectionKind::Module(name)
        } else if section_name == SECTION_CONFIGURATION {
            SectionKind::Configuration
        } else {
            SectionKind::Other
        }
    }
}

/// A `daemon.<name>` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaemonSpec {
    pub name: String,
    pub properties: Properties,
}

impl DaemonSpec {
    /// Build a spec from a section, if the section is a daemon section.
    pub fn from_section(section: &Section) -> Option<Self> {
        match SectionKind::classify(&section.name) {
            SectionKind::Daemon(name) => Some(Self {
                name: name.to_string(),
                properties: section.properties.clone(),
            }),
            _ => None,
        }
    }

    /// Declared daemon type (`arbiter`, `scheduler`, ...).
    pub fn daemon_type(&self) -> Option<&str> {
        self.properties.get(DAEMON_TYPE_KEY)
    }

    /// Module names listed in the `modules` key, in declared order.
    pub fn module_names(&self) -> Vec<&str> {
        split_module_list(self.properties.get(DAEMON_MODULES_KEY).unwrap_or_default())
    }
}

/// A `module.<name>` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSpec {
    pub name: String,
    pub properties: Properties,
}

impl ModuleSpec {
    pub fn from_section(section: &Section) -> Option<Self> {
        match SectionKind::classify(&section.name) {
            SectionKind::Module(name) => Some(Self {
                name: name.to_string(),
                properties: section.properties.clone(),
            }),
            _ => None,
        }
    }
}

/// The `alignak-configuration` section split by key convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonitoringConfiguration {
    /// Keys starting with `cfg`: monitored-object file references.
    pub files: Properties,
    /// Every other key.
    pub settings: Properties,
}

impl MonitoringConfiguration {
    pub fn partition(properties: Properties) -> Self {
        let mut configuration = Self::default();
        for (key, value) in properties {
            if key.starts_with(CFG_KEY_PREFIX) {
                configuration.files.insert(key, value);
            } else {
                configuration.settings.insert(key, value);
            }
        }
        configuration
    }
}

/// Split a comma-separated module list, trimming entries and skipping empty ones.
pub(crate) fn split_module_list(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}
