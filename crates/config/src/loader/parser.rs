//! Line-level parser for section/key-value documents.
//!
//! Responsibilities:
//! - Split a document into the default section and named sections.
//! - Handle comments, inline `;` comments, continuation lines and `""` empty values.
//! - Collect every malformed line instead of stopping at the first one.
//!
//! Does NOT handle:
//! - Interpolation of `%(name)s` references (see `interpolation.rs`).
//! - Deciding which failure wins (see `builder.rs`).
//!
//! Invariants:
//! - Values are stored raw (uninterpolated) and trimmed.
//! - Repeated section headers merge into the first occurrence.

use super::error::MalformedLine;
use crate::constants::DEFAULT_SECTION;
use crate::types::{Properties, Section};

/// Uninterpolated result of parsing one document.
#[derive(Debug, Default)]
pub(crate) struct RawDocument {
    /// At least one `[...]` header was seen (including `[DEFAULT]`).
    pub has_headers: bool,
    pub defaults: Properties,
    pub sections: Vec<Section>,
    pub malformed: Vec<MalformedLine>,
}

#[derive(Debug, Clone, Copy)]
enum Cursor {
    Default,
    Section(usize),
}

impl RawDocument {
    fn target(&mut self, cursor: Cursor) -> &mut Properties {
        match cursor {
            Cursor::Default => &mut self.defaults,
            Cursor::Section(index) => &mut self.sections[index].properties,
        }
    }

    fn open_section(&mut self, name: &str) -> Cursor {
        if name == DEFAULT_SECTION {
            return Cursor::Default;
        }
        match self.sections.iter().position(|s| s.name == name) {
            Some(index) => Cursor::Section(index),
            None => {
                self.sections.push(Section {
                    name: name.to_string(),
                    properties: Properties::new(),
                });
                Cursor::Section(self.sections.len() - 1)
            }
        }
    }
}

pub(crate) fn parse(text: &str) -> RawDocument {
    let mut document = RawDocument::default();
    let mut cursor: Option<Cursor> = None;
    let mut option: Option<String> = None;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            if let (Some(at), Some(key)) = (cursor, option.as_deref()) {
                if let Some(value) = document.target(at).get_mut(key) {
                    value.push('\n');
                    value.push_str(line.trim());
                    continue;
                }
            }
        }

        if let Some(name) = section_header(line) {
            document.has_headers = true;
            cursor = Some(document.open_section(name));
            option = None;
            continue;
        }

        match (cursor, option_line(line)) {
            (Some(at), Some((key, value))) => {
                document.target(at).insert(key, value);
                option = Some(key.to_string());
            }
            _ => document.malformed.push(MalformedLine {
                number: index + 1,
                content: line.to_string(),
            }),
        }
    }

    document
}

/// `[name]` at the start of the line; anything after the `]` is ignored.
fn section_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let end = rest.find(']')?;
    let name = &rest[..end];
    (!name.is_empty()).then_some(name)
}

/// `key = value` or `key: value`, split on the first separator.
fn option_line(line: &str) -> Option<(&str, String)> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let separator = line.find(['=', ':'])?;
    let key = line[..separator].trim_end();
    if key.is_empty() {
        return None;
    }

    // A `;` starts a comment only after whitespace inside the value itself.
    let mut value = line[separator + 1..].trim_start();
    if let Some(pos) = value.find(';') {
        if pos > 0 && value[..pos].ends_with(char::is_whitespace) {
            value = &value[..pos];
        }
    }
    let value = value.trim_end();
    let value = if value == "\"\"" { "" } else { value };
    Some((key, value.to_string()))
}
