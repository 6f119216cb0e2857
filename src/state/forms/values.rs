//! Form values and per-field error messages

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Value held by a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text inputs and single-choice selects
    Text(String),
    /// Identifiers picked in a checkbox group
    Selection(BTreeSet<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Selection(_) => "",
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        match self {
            FieldValue::Selection(set) => set.contains(id),
            FieldValue::Text(_) => false,
        }
    }
}

/// Current value of every field, keyed by field name.
/// Serializes directly into the submission payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: &str, value: FieldValue) {
        self.0.insert(name.to_string(), value);
    }

    /// Text value of a field, empty when missing
    pub fn text(&self, name: &str) -> &str {
        self.0.get(name).map(FieldValue::as_text).unwrap_or("")
    }

    pub fn set_text(&mut self, name: &str, value: String) {
        self.0.insert(name.to_string(), FieldValue::Text(value));
    }

    /// Add the identifier if absent, remove it if present.
    /// A non-selection value under `name` is replaced by a fresh set.
    pub fn toggle(&mut self, name: &str, id: &str) {
        let entry = self
            .0
            .entry(name.to_string())
            .or_insert_with(|| FieldValue::Selection(BTreeSet::new()));
        if matches!(entry, FieldValue::Text(_)) {
            *entry = FieldValue::Selection(BTreeSet::new());
        }
        if let FieldValue::Selection(set) = entry {
            if !set.remove(id) {
                set.insert(id.to_string());
            }
        }
    }
}

/// Validation message per field; an empty string means valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Start with a blank entry for every named field
    pub fn for_fields<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self(
            names
                .into_iter()
                .map(|n| (n.to_string(), String::new()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, message: String) {
        self.0.insert(name.to_string(), message);
    }

    pub fn clear(&mut self, name: &str) {
        self.set(name, String::new());
    }

    pub fn has_any(&self) -> bool {
        self.0.values().any(|m| !m.is_empty())
    }
}
