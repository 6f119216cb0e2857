//! Form state container and the reducer that updates it

use super::catalog::FormDefinition;
use super::field::{FieldKind, FormField};
use super::values::{FieldErrors, FormValues};

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// A state change requested by an input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// New value for a text or select field
    SetText { name: String, value: String },
    /// Flip one identifier in a checkbox group
    ToggleOption { name: String, id: String },
    /// Back to default values with no errors
    Reset,
}

/// Live state of one form
#[derive(Debug, Clone)]
pub struct FormState {
    pub definition: FormDefinition,
    pub values: FormValues,
    pub errors: FieldErrors,
    /// Derived: whole form satisfies the schema
    pub submit_enabled: bool,
    /// Message returned by the server for the last successful submission
    pub message: Option<String>,
    /// A submission is in flight
    pub submitting: bool,
    /// Focused row: one per field, then the submit button
    pub active_field_index: usize,
    /// Highlighted row inside the focused checkbox group
    pub option_cursor: usize,
}

impl FormState {
    pub fn new(definition: FormDefinition) -> Self {
        let values = definition.default_values();
        let errors = FieldErrors::for_fields(definition.schema.field_names());
        let submit_enabled = definition.schema.is_valid(&values);
        Self {
            definition,
            values,
            errors,
            submit_enabled,
            message: None,
            submitting: false,
            active_field_index: 0,
            option_cursor: 0,
        }
    }

    /// Apply an action to the latest snapshot, then re-derive enablement
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetText { name, value } => {
                let outcome = self.definition.schema.validate_field(&name, &value);
                match outcome {
                    Ok(()) => self.errors.clear(&name),
                    Err(err) => {
                        tracing::debug!(
                            "{} field {} invalid: {err}",
                            self.definition.id.label(),
                            err.field()
                        );
                        self.errors.set(&name, err.to_string());
                    }
                }
                self.values.set_text(&name, value);
            }
            FormAction::ToggleOption { name, id } => {
                self.values.toggle(&name, &id);
            }
            FormAction::Reset => {
                self.values = self.definition.default_values();
                self.errors = FieldErrors::for_fields(self.definition.schema.field_names());
            }
        }
        self.submit_enabled = self.definition.schema.is_valid(&self.values);
    }

    /// Returns true if the submit button row is focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.definition.fields.len()
    }

    pub fn active_form_field(&self) -> Option<&FormField> {
        self.definition.fields.get(self.active_field_index)
    }

    pub fn is_active_field_multi_select(&self) -> bool {
        self.active_form_field().is_some_and(|f| f.is_multi_select())
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_form_field() else {
            return;
        };
        if !matches!(field.kind, FieldKind::Text { .. }) {
            return;
        }
        let name = field.name.clone();
        let mut value = self.values.text(&name).to_string();
        value.push(c);
        self.apply(FormAction::SetText { name, value });
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        let Some(field) = self.active_form_field() else {
            return;
        };
        if !matches!(field.kind, FieldKind::Text { .. }) {
            return;
        }
        let name = field.name.clone();
        let mut value = self.values.text(&name).to_string();
        if value.pop().is_none() {
            return;
        }
        self.apply(FormAction::SetText { name, value });
    }

    /// Step the focused select field to its next or previous option
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.active_form_field() else {
            return;
        };
        let name = field.name.clone();
        let next = field.cycle_choice(self.values.text(&name), forward);
        if let Some(value) = next {
            self.apply(FormAction::SetText { name, value });
        }
    }

    /// Move the highlight within the focused checkbox group
    pub fn move_option_cursor(&mut self, down: bool) {
        let count = self.active_form_field().map(|f| f.option_count()).unwrap_or(0);
        if count == 0 {
            return;
        }
        self.option_cursor = if down {
            (self.option_cursor + 1) % count
        } else if self.option_cursor == 0 {
            count - 1
        } else {
            self.option_cursor - 1
        };
    }

    /// Toggle the highlighted checkbox of the focused group
    pub fn toggle_option_at_cursor(&mut self) {
        let Some(field) = self.active_form_field() else {
            return;
        };
        let Some(id) = field.option_id(self.option_cursor) else {
            return;
        };
        let action = FormAction::ToggleOption {
            name: field.name.clone(),
            id: id.to_string(),
        };
        self.apply(action);
    }

    /// Start a submission if allowed, returning the payload to send
    pub fn begin_submit(&mut self) -> Option<FormValues> {
        if !self.submit_enabled || self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.values.clone())
    }

    /// Record a successful submission: show the message, reset the values
    pub fn complete_submit(&mut self, message: String) {
        self.submitting = false;
        self.message = Some(message);
        self.apply(FormAction::Reset);
    }

    /// Record a failed submission, keeping the values for another attempt
    pub fn fail_submit(&mut self) {
        self.submitting = false;
    }
}

impl Form for FormState {
    fn field_count(&self) -> usize {
        self.definition.fields.len() + 1 // fields, then the submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.definition.fields.len());
        self.option_cursor = 0;
    }
}
