//! Results of daemon and module queries.
//!
//! A query either targets one named entity or a whole family; the enums keep
//! both shapes statically distinct.

use serde::Serialize;

use crate::types::{Properties, SectionFamily};

/// Result of [`Resolver::daemons`](super::Resolver::daemons).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DaemonSelection {
    /// One daemon looked up by name; empty when absent.
    Single(Properties),
    /// Every daemon, or every daemon of one type.
    Family(SectionFamily),
}

impl DaemonSelection {
    pub fn into_single(self) -> Option<Properties> {
        match self {
            DaemonSelection::Single(properties) => Some(properties),
            DaemonSelection::Family(_) => None,
        }
    }

    pub fn into_family(self) -> Option<SectionFamily> {
        match self {
            DaemonSelection::Family(family) => Some(family),
            DaemonSelection::Single(_) => None,
        }
    }
}

/// Result of [`Resolver::modules`](super::Resolver::modules).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ModuleSelection {
    /// One module looked up by name; empty when absent.
    Single(Properties),
    /// A daemon's module names, in declared order.
    Names(Vec<String>),
    /// A daemon's modules, in declared order; unknown modules are empty.
    Specs(Vec<Properties>),
    /// Every module.
    Family(SectionFamily),
}

impl ModuleSelection {
    pub fn into_single(self) -> Option<Properties> {
        match self {
            ModuleSelection::Single(properties) => Some(properties),
            _ => None,
        }
    }

    pub fn into_names(self) -> Option<Vec<String>> {
        match self {
            ModuleSelection::Names(names) => Some(names),
            _ => None,
        }
    }

    pub fn into_specs(self) -> Option<Vec<Properties>> {
        match self {
            ModuleSelection::Specs(specs) => Some(specs),
            _ => None,
        }
    }

    pub fn into_family(self) -> Option<SectionFamily> {
        match self {
            ModuleSelection::Family(family) => Some(family),
            _ => None,
        }
    }
}
