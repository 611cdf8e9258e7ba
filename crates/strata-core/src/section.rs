//! The namespace tree
//!
//! A [`Section`] maps case-folded segment names to values. Each entry also
//! remembers the casing it was first written with, which is what export
//! emits. Merging is leaf-level: an overlay replaces individual leaves and
//! never drops sibling leaves of the base.

use crate::key::{KeyPath, fold};
use crate::value::Value;
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    value: Value,
}

/// One level of the namespace tree.
#[derive(Debug, Clone, Default)]
pub struct Section {
    entries: BTreeMap<String, Entry>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up `key` (dotted, case-insensitive).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.lookup(&KeyPath::parse(key))
    }

    pub fn lookup(&self, path: &KeyPath) -> Option<&Value> {
        self.lookup_segments(path.segments())
    }

    fn lookup_segments(&self, segments: &[String]) -> Option<&Value> {
        let (first, rest) = segments.split_first()?;
        let value = &self.entries.get(&fold(first))?.value;
        if rest.is_empty() {
            return Some(value);
        }
        match value {
            Value::Map(child) => child.lookup_segments(rest),
            _ => None,
        }
    }

    /// True when some strict prefix of `path` holds a non-map value, which
    /// hides anything a lower layer has beneath that prefix.
    pub(crate) fn shadows(&self, path: &KeyPath) -> bool {
        self.shadows_segments(path.segments())
    }

    fn shadows_segments(&self, segments: &[String]) -> bool {
        let Some((first, rest)) = segments.split_first() else {
            return false;
        };
        if rest.is_empty() {
            return false;
        }
        match self.entries.get(&fold(first)).map(|entry| &entry.value) {
            Some(Value::Map(child)) => child.shadows_segments(rest),
            Some(_) => true,
            None => false,
        }
    }

    /// Write `value` at `path`, creating intermediate levels.
    ///
    /// A map written over an existing map is merged into it; anything else
    /// replaces what was there. Existing entries keep their original casing.
    pub fn insert(&mut self, path: &KeyPath, value: Value) {
        self.insert_segments(path.segments(), value);
    }

    fn insert_segments(&mut self, segments: &[String], value: Value) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };
        let entry = self.entries.entry(fold(first)).or_insert_with(|| Entry {
            name: first.clone(),
            value: Value::Map(Section::new()),
        });

        if rest.is_empty() {
            match (&mut entry.value, value) {
                (Value::Map(existing), Value::Map(incoming)) => existing.merge(&incoming),
                (slot, value) => *slot = value,
            }
            return;
        }

        if !matches!(entry.value, Value::Map(_)) {
            entry.value = Value::Map(Section::new());
        }
        if let Value::Map(child) = &mut entry.value {
            child.insert_segments(rest, value);
        }
    }

    /// Deep merge `other` into this section, `other` taking precedence.
    pub fn merge(&mut self, other: &Section) {
        for entry in other.entries.values() {
            self.insert_segments(std::slice::from_ref(&entry.name), entry.value.clone());
        }
    }

    /// Every leaf as `(lowercase dotted key, value)`, depth first with each
    /// level in folded-name order.
    ///
    /// Empty maps have no leaves and are not listed.
    pub fn leaves(&self) -> Vec<(String, &Value)> {
        let mut out = Vec::new();
        self.collect_leaves("", &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a Value)>) {
        for (key, entry) in &self.entries {
            let full = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match &entry.value {
                Value::Map(child) => child.collect_leaves(&full, out),
                leaf => out.push((full, leaf)),
            }
        }
    }

    pub fn leaf_keys(&self) -> Vec<String> {
        self.leaves().into_iter().map(|(key, _)| key).collect()
    }

    /// Build a section from a parsed document.
    ///
    /// Dotted keys are split into segments, so `{"a.b": 1}` and
    /// `{"a": {"b": 1}}` produce the same tree. Null values are skipped.
    pub fn from_document(document: &Map<String, JsonValue>) -> Section {
        let mut section = Section::new();
        for (key, node) in document {
            let path = KeyPath::parse(key);
            if path.is_empty() {
                continue;
            }
            if let Some(value) = Value::from_json(node) {
                section.insert(&path, value);
            }
        }
        section
    }

    /// Render this section as a document using the original casing.
    pub fn to_document(&self) -> Map<String, JsonValue> {
        self.entries
            .values()
            .map(|entry| (entry.name.clone(), entry.value.to_json()))
            .collect()
    }
}

/// Sections compare by folded key and value; original casing is ignored.
impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((ka, a), (kb, b))| ka == kb && a.value == b.value)
    }
}
