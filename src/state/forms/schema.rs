//! Declarative validation rules for form fields

use super::values::{FieldValue, FormValues};
use thiserror::Error;

/// A single violated constraint, carrying the message configured for it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    Required { field: String, message: String },
    #[error("{message}")]
    TooShort { field: String, message: String },
    #[error("{message}")]
    TooLong { field: String, message: String },
    #[error("{message}")]
    NotAllowed { field: String, message: String },
}

impl ValidationError {
    /// Name of the field that failed
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field, .. }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }
}

/// A length bound paired with the message produced when it is violated
#[derive(Debug, Clone)]
pub struct LengthBound {
    pub limit: usize,
    pub message: String,
}

/// An allowed-value set paired with its violation message
#[derive(Debug, Clone)]
pub struct AllowedValues {
    pub values: Vec<String>,
    pub message: String,
}

/// Constraints for one field
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: String,
    /// Message when the value is empty; `None` means the field is optional
    pub required: Option<String>,
    pub min_len: Option<LengthBound>,
    pub max_len: Option<LengthBound>,
    pub allowed: Option<AllowedValues>,
    /// Trim surrounding whitespace before single-field validation
    pub trim: bool,
}

impl FieldRule {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: None,
            min_len: None,
            max_len: None,
            allowed: None,
            trim: false,
        }
    }

    pub fn required(mut self, message: &str) -> Self {
        self.required = Some(message.to_string());
        self
    }

    pub fn min(mut self, limit: usize, message: &str) -> Self {
        self.min_len = Some(LengthBound {
            limit,
            message: message.to_string(),
        });
        self
    }

    pub fn max(mut self, limit: usize, message: &str) -> Self {
        self.max_len = Some(LengthBound {
            limit,
            message: message.to_string(),
        });
        self
    }

    pub fn one_of(mut self, values: &[&str], message: &str) -> Self {
        self.allowed = Some(AllowedValues {
            values: values.iter().map(|v| v.to_string()).collect(),
            message: message.to_string(),
        });
        self
    }

    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Check the value against every constraint, first failure wins.
    /// Order: required, min length, max length, allowed set.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            if let Some(message) = &self.required {
                return Err(ValidationError::Required {
                    field: self.name.clone(),
                    message: message.clone(),
                });
            }
            // Absent optional values skip the remaining constraints
            return Ok(());
        }

        let len = value.chars().count();

        if let Some(bound) = &self.min_len {
            if len < bound.limit {
                return Err(ValidationError::TooShort {
                    field: self.name.clone(),
                    message: bound.message.clone(),
                });
            }
        }

        if let Some(bound) = &self.max_len {
            if len > bound.limit {
                return Err(ValidationError::TooLong {
                    field: self.name.clone(),
                    message: bound.message.clone(),
                });
            }
        }

        if let Some(allowed) = &self.allowed {
            if !allowed.values.iter().any(|v| v == value) {
                return Err(ValidationError::NotAllowed {
                    field: self.name.clone(),
                    message: allowed.message.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Immutable set of field rules for one form
#[derive(Debug, Clone, Default)]
pub struct Schema {
    rules: Vec<FieldRule>,
}

impl Schema {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Names of all fields that carry rules
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    /// Validate a single field value. Fields without rules always pass.
    pub fn validate_field(&self, name: &str, value: &str) -> Result<(), ValidationError> {
        match self.rule(name) {
            Some(rule) if rule.trim => rule.check(value.trim()),
            Some(rule) => rule.check(value),
            None => Ok(()),
        }
    }

    /// Whole-object check used to derive submit enablement.
    /// Missing or non-text values for ruled fields count as empty.
    pub fn is_valid(&self, values: &FormValues) -> bool {
        self.rules.iter().all(|rule| {
            let value = match values.get(&rule.name) {
                Some(FieldValue::Text(s)) => s.as_str(),
                _ => "",
            };
            rule.check(value).is_ok()
        })
    }
}
