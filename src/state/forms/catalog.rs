//! Form definitions: schema, field layout and submission endpoint

use super::field::{ChoiceOption, FormField};
use super::schema::{FieldRule, Schema};
use super::values::FormValues;

/// Default endpoint for pizza orders
pub const DEFAULT_ORDER_ENDPOINT: &str = "http://localhost:9009/api/order";
/// Default endpoint for the information form
pub const DEFAULT_INFORMATION_ENDPOINT: &str = "http://localhost:9000/form-submission";

/// Identifies one of the application's forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormId {
    Order,
    Information,
}

impl FormId {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Information => "information",
        }
    }
}

/// Everything the generic form renderer and handlers need for one form
#[derive(Debug, Clone)]
pub struct FormDefinition {
    pub id: FormId,
    pub title: String,
    pub fields: Vec<FormField>,
    pub schema: Schema,
    pub endpoint: String,
}

impl FormDefinition {
    /// Values every field starts with and returns to after a successful submit
    pub fn default_values(&self) -> FormValues {
        let mut values = FormValues::new();
        for field in &self.fields {
            values.insert(&field.name, field.default_value());
        }
        values
    }
}

fn sizes() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("S", "Small"),
        ChoiceOption::new("M", "Medium"),
        ChoiceOption::new("L", "Large"),
    ]
}

/// Pizza order form
pub fn order_form(endpoint: &str) -> FormDefinition {
    let schema = Schema::new(vec![
        FieldRule::new("fullName")
            .required("fullName is a required field")
            .min(3, "full name must be at least 3 characters")
            .max(20, "full name must be at most 20 characters")
            .trimmed(),
        FieldRule::new("size")
            .required("size is a required field")
            .one_of(&["S", "M", "L"], "size must be S or M or L"),
    ]);

    let toppings = vec![
        ChoiceOption::new("1", "Pepperoni"),
        ChoiceOption::new("2", "Green Peppers"),
        ChoiceOption::new("3", "Pineapple"),
        ChoiceOption::new("4", "Mushrooms"),
        ChoiceOption::new("5", "Ham"),
    ];

    FormDefinition {
        id: FormId::Order,
        title: "Order Your Pizza".to_string(),
        fields: vec![
            FormField::text("fullName", "Full Name", "Type full name"),
            FormField::select("size", "Size", "----Choose Size----", sizes()),
            FormField::checkboxes("toppings", "Toppings", toppings),
        ],
        schema,
        endpoint: endpoint.to_string(),
    }
}

/// Customer information form
pub fn information_form(endpoint: &str) -> FormDefinition {
    let schema = Schema::new(vec![
        FieldRule::new("fullName")
            .required("Full name is required")
            .min(3, "Full name must be at least 3 characters")
            .max(20, "Full name must be at most 20 characters"),
        FieldRule::new("shirtsize")
            .required("Shirt size is required")
            .one_of(
                &["S", "M", "L"],
                "Shirt size must be one of the following: S, M, L",
            ),
    ]);

    let animals = vec![
        ChoiceOption::new("1", "cat"),
        ChoiceOption::new("2", "dog"),
        ChoiceOption::new("3", "bird"),
        ChoiceOption::new("4", "fish"),
    ];

    FormDefinition {
        id: FormId::Information,
        title: "Information".to_string(),
        fields: vec![
            FormField::text("fullName", "Full Name", "Full Name"),
            FormField::select("shirtsize", "Shirt Size", "Select Size", sizes()),
            FormField::checkboxes("animals", "Animals", animals),
        ],
        schema,
        endpoint: endpoint.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_order_defaults() {
        let form = order_form(DEFAULT_ORDER_ENDPOINT);
        let values = form.default_values();
        assert_eq!(
            serde_json::to_value(&values).unwrap(),
            serde_json::json!({"fullName": "", "size": "", "toppings": []})
        );
        assert_eq!(form.endpoint, "http://localhost:9009/api/order");
    }

    #[test]
    fn test_information_defaults() {
        let form = information_form(DEFAULT_INFORMATION_ENDPOINT);
        let values = form.default_values();
        assert_eq!(values.text("shirtsize"), "");
        assert!(matches!(values.get("animals"), Some(FieldValue::Selection(s)) if s.is_empty()));
    }

    #[test]
    fn test_checkbox_fields_have_no_rules() {
        for form in [
            order_form(DEFAULT_ORDER_ENDPOINT),
            information_form(DEFAULT_INFORMATION_ENDPOINT),
        ] {
            for field in form.fields.iter().filter(|f| f.is_multi_select()) {
                assert!(form.schema.rule(&field.name).is_none());
            }
        }
    }

    #[test]
    fn test_information_messages() {
        let form = information_form(DEFAULT_INFORMATION_ENDPOINT);
        let err = form.schema.validate_field("shirtsize", "").unwrap_err();
        assert_eq!(err.to_string(), "Shirt size is required");
        let err = form.schema.validate_field("shirtsize", "XL").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Shirt size must be one of the following: S, M, L"
        );
    }

    #[test]
    fn test_information_full_name_messages() {
        let form = information_form(DEFAULT_INFORMATION_ENDPOINT);
        let err = form.schema.validate_field("fullName", "").unwrap_err();
        assert_eq!(err.to_string(), "Full name is required");
        let err = form.schema.validate_field("fullName", "Bo").unwrap_err();
        assert_eq!(err.to_string(), "Full name must be at least 3 characters");
        let err = form
            .schema
            .validate_field("fullName", "Bartholomew Montgomery")
            .unwrap_err();
        assert_eq!(err.to_string(), "Full name must be at most 20 characters");
        assert!(form.schema.validate_field("fullName", "Bea").is_ok());
    }

    #[test]
    fn test_defaults_are_invalid() {
        let form = order_form(DEFAULT_ORDER_ENDPOINT);
        assert!(!form.schema.is_valid(&form.default_values()));
    }
}
