//! The loaded configuration document and section-family views.
//!
//! Responsibilities:
//! - Hold the fully resolved section table produced by the loader.
//! - Provide the `SectionFamily` view returned by prefix searches.
//!
//! Does NOT handle:
//! - Parsing or interpolation (see `loader`).
//! - Typed entity queries (see `resolver`).
//!
//! Invariants:
//! - Every value stored here is already interpolated.
//! - Section properties are the merged view: own keys first, then inherited defaults.
//! - The default section is not listed among `sections()`.

use serde::ser::{Serialize, Serializer};
use std::path::{Path, PathBuf};

use super::properties::Properties;

/// A named, resolved configuration section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub properties: Properties,
}

/// A parsed and resolved configuration file.
#[derive(Debug, Clone)]
pub struct ConfigurationDocument {
    path: PathBuf,
    defaults: Properties,
    sections: Vec<Section>,
}

impl ConfigurationDocument {
    pub(crate) fn new(path: PathBuf, defaults: Properties, sections: Vec<Section>) -> Self {
        Self {
            path,
            defaults,
            sections,
        }
    }

    /// Absolute path of the file this document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolved keys of the default section.
    pub fn defaults(&self) -> &Properties {
        &self.defaults
    }

    /// Non-default sections, in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }
}

/// Sections sharing a name prefix, keyed by full section name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionFamily {
    members: Vec<Section>,
}

impl SectionFamily {
    pub(crate) fn push(&mut self, section: Section) {
        self.members.push(section);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Section) -> bool) {
        self.members.retain(keep);
    }

    pub fn get(&self, name: &str) -> Option<&Properties> {
        self.members
            .iter()
            .find(|s| s.name == name)
            .map(|s| &s.properties)
    }

    /// Remove and return one member's properties.
    pub fn take(&mut self, name: &str) -> Option<Properties> {
        let index = self.members.iter().position(|s| s.name == name)?;
        Some(self.members.remove(index).properties)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl IntoIterator for SectionFamily {
    type Item = Section;
    type IntoIter = std::vec::IntoIter<Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl Serialize for SectionFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.members.iter().map(|s| (&s.name, &s.properties)))
    }
}
