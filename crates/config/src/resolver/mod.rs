//! Read-only queries over a loaded configuration document.
//!
//! Responsibilities:
//! - Prefix search over section names, tagging each hit with its source file.
//! - Typed accessors for defaults, the monitoring configuration, daemons and modules.
//! - Entry points for environment and shell projection (see `projection`).
//!
//! Does NOT handle:
//! - Loading or parsing (see `loader`).
//! - Writing the process environment (see `ResolvedEnvironment::apply_to_process_env`).
//!
//! Invariants:
//! - No query fails; absent data yields empty results.
//! - Views are recomputed on every call from the owned document.
//! - A name filter always wins over a type filter.

mod selection;

pub use selection::{DaemonSelection, ModuleSelection};

use crate::constants::{
    DAEMON_MODULES_KEY, DAEMON_PREFIX, DAEMON_TYPE_KEY, IMPORTED_FROM_KEY, MODULE_PREFIX,
    SECTION_CONFIGURATION,
};
use crate::projection::{ResolvedEnvironment, ShellExport};
use crate::types::{
    ConfigurationDocument, DaemonSpec, ModuleSpec, MonitoringConfiguration, Properties, Section,
    SectionFamily, split_module_list,
};

/// Query surface over one resolved configuration document.
#[derive(Debug, Clone)]
pub struct Resolver {
    document: ConfigurationDocument,
}

impl Resolver {
    pub fn new(document: ConfigurationDocument) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &ConfigurationDocument {
        &self.document
    }

    /// Every section whose name starts with `prefix`, in document order.
    ///
    /// Each returned section carries an extra `imported_from` key holding the
    /// configuration file path.
    pub fn search(&self, prefix: &str) -> SectionFamily {
        let source = self.document.path().display().to_string();
        let mut family = SectionFamily::default();
        for section in self.document.sections() {
            if !section.name.starts_with(prefix) {
                continue;
            }
            let mut properties = Properties::new();
            properties.insert(IMPORTED_FROM_KEY, source.as_str());
            for (key, value) in section.properties.iter() {
                properties.insert(key, value);
            }
            family.push(Section {
                name: section.name.clone(),
                properties,
            });
        }
        family
    }

    /// Resolved keys of the default section.
    pub fn defaults(&self) -> Properties {
        self.document.defaults().clone()
    }

    /// Both halves of the `alignak-configuration` section.
    pub fn monitoring(&self) -> MonitoringConfiguration {
        self.search(SECTION_CONFIGURATION)
            .take(SECTION_CONFIGURATION)
            .map(MonitoringConfiguration::partition)
            .unwrap_or_default()
    }

    /// Monitored-object file references (keys starting with `cfg`).
    pub fn monitoring_configuration(&self) -> Properties {
        self.monitoring().files
    }

    /// Every other key of the configuration section.
    pub fn general_configuration(&self) -> Properties {
        self.monitoring().settings
    }

    /// Daemon lookup by name, by type, or all daemons.
    ///
    /// `name` takes precedence over `daemon_type` when both are given.
    pub fn daemons(&self, name: Option<&str>, daemon_type: Option<&str>) -> DaemonSelection {
        match (name, daemon_type) {
            (Some(name), _) => DaemonSelection::Single(self.daemon(name)),
            (None, Some(daemon_type)) => DaemonSelection::Family(self.daemons_of_type(daemon_type)),
            (None, None) => DaemonSelection::Family(self.all_daemons()),
        }
    }

    /// The `daemon.<name>` section, or an empty set when absent.
    pub fn daemon(&self, name: &str) -> Properties {
        let section_name = format!("{DAEMON_PREFIX}{name}");
        self.search(&section_name)
            .take(&section_name)
            .unwrap_or_default()
    }

    /// Daemon sections whose `type` equals `daemon_type`; untyped daemons are skipped.
    pub fn daemons_of_type(&self, daemon_type: &str) -> SectionFamily {
        let mut family = self.all_daemons();
        family.retain(|section| section.properties.get(DAEMON_TYPE_KEY) == Some(daemon_type));
        family
    }

    pub fn all_daemons(&self) -> SectionFamily {
        self.search(DAEMON_PREFIX)
    }

    /// Every daemon section as a typed spec, without the `imported_from` tag.
    pub fn daemon_specs(&self) -> Vec<DaemonSpec> {
        self.document
            .sections()
            .iter()
            .filter_map(DaemonSpec::from_section)
            .collect()
    }

    /// Module lookup by name, by owning daemon, or all modules.
    ///
    /// With `daemon_name`, `names_only` selects bare names or full module sections.
    pub fn modules(
        &self,
        name: Option<&str>,
        daemon_name: Option<&str>,
        names_only: bool,
    ) -> ModuleSelection {
        match (name, daemon_name) {
            (Some(name), _) => ModuleSelection::Single(self.module(name)),
            (None, Some(daemon)) if names_only => {
                ModuleSelection::Names(self.daemon_module_names(daemon))
            }
            (None, Some(daemon)) => ModuleSelection::Specs(self.daemon_modules(daemon)),
            (None, None) => ModuleSelection::Family(self.all_modules()),
        }
    }

    /// The `module.<name>` section, or an empty set when absent.
    pub fn module(&self, name: &str) -> Properties {
        let section_name = format!("{MODULE_PREFIX}{name}");
        self.search(&section_name)
            .take(&section_name)
            .unwrap_or_default()
    }

    /// Module names declared by a daemon; empty when the daemon or its list is missing.
    pub fn daemon_module_names(&self, daemon_name: &str) -> Vec<String> {
        let daemon = self.daemon(daemon_name);
        split_module_list(daemon.get(DAEMON_MODULES_KEY).unwrap_or_default())
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Modules declared by a daemon, in declared order.
    ///
    /// A declared module without a matching section yields an empty entry.
    pub fn daemon_modules(&self, daemon_name: &str) -> Vec<Properties> {
        self.daemon_module_names(daemon_name)
            .iter()
            .map(|module| self.module(module))
            .collect()
    }

    pub fn all_modules(&self) -> SectionFamily {
        self.search(MODULE_PREFIX)
    }

    pub fn module_specs(&self) -> Vec<ModuleSpec> {
        self.document
            .sections()
            .iter()
            .filter_map(ModuleSpec::from_section)
            .collect()
    }

    /// Flatten every resolved `section.key` into an explicit mapping.
    ///
    /// Nothing is written to the process environment; see
    /// [`ResolvedEnvironment::apply_to_process_env`].
    pub fn project_to_environment(&self) -> ResolvedEnvironment {
        ResolvedEnvironment::from_document(&self.document)
    }

    /// One `export NAME=value` line per resolved key.
    pub fn export_as_shell(&self) -> ShellExport {
        self.project_to_environment().into_exports()
    }
}
