//! Form field layout objects

use super::values::FieldValue;
use std::collections::BTreeSet;

/// A selectable option: the submitted value and the text shown for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// How a field is edited and what kind of value it holds
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Free text input
    Text { placeholder: String },
    /// Single choice; the empty value is shown as `placeholder`
    Select {
        placeholder: String,
        options: Vec<ChoiceOption>,
    },
    /// Multi-select checkbox group
    Checkboxes { options: Vec<ChoiceOption> },
}

/// Represents a single form field with its configuration
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text {
                placeholder: placeholder.to_string(),
            },
        }
    }

    /// Create a new select field
    pub fn select(name: &str, label: &str, placeholder: &str, options: Vec<ChoiceOption>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Select {
                placeholder: placeholder.to_string(),
                options,
            },
        }
    }

    /// Create a new checkbox group
    pub fn checkboxes(name: &str, label: &str, options: Vec<ChoiceOption>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Checkboxes { options },
        }
    }

    /// Initial value for this field
    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Checkboxes { .. } => FieldValue::Selection(BTreeSet::new()),
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn is_multi_select(&self) -> bool {
        matches!(self.kind, FieldKind::Checkboxes { .. })
    }

    /// Number of checkbox rows (0 for other kinds)
    pub fn option_count(&self) -> usize {
        match &self.kind {
            FieldKind::Checkboxes { options } => options.len(),
            _ => 0,
        }
    }

    /// Identifier of the checkbox at `index`
    pub fn option_id(&self, index: usize) -> Option<&str> {
        match &self.kind {
            FieldKind::Checkboxes { options } => options.get(index).map(|o| o.value.as_str()),
            _ => None,
        }
    }

    /// Next select value after `current`, wrapping through the empty placeholder.
    /// Returns `None` for non-select fields.
    pub fn cycle_choice(&self, current: &str, forward: bool) -> Option<String> {
        let FieldKind::Select { options, .. } = &self.kind else {
            return None;
        };
        // Slot 0 is the placeholder, slots 1..=n are options
        let slots = options.len() + 1;
        let position = options
            .iter()
            .position(|o| o.value == current)
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (position + 1) % slots
        } else {
            (position + slots - 1) % slots
        };
        Some(match next {
            0 => String::new(),
            n => options[n - 1].value.clone(),
        })
    }

    /// Get the display value for rendering
    pub fn display_value(&self, value: &FieldValue) -> String {
        match (&self.kind, value) {
            (FieldKind::Text { .. }, v) => v.as_text().to_string(),
            (
                FieldKind::Select {
                    placeholder,
                    options,
                },
                v,
            ) => options
                .iter()
                .find(|o| o.value == v.as_text())
                .map(|o| o.label.clone())
                .unwrap_or_else(|| placeholder.clone()),
            (FieldKind::Checkboxes { options }, v) => options
                .iter()
                .filter(|o| v.contains(&o.value))
                .map(|o| o.label.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
