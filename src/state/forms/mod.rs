//! Form domain layer
//!
//! Schema-driven form handling shared by every form in the app:
//! declarative rules, value/error containers and a single reducer.

mod catalog;
mod field;
mod form_state;
mod schema;
mod values;

pub use catalog::{
    information_form, order_form, FormId, DEFAULT_INFORMATION_ENDPOINT, DEFAULT_ORDER_ENDPOINT,
};
pub use field::{FieldKind, FormField};
pub use form_state::{Form, FormAction, FormState};
pub use values::{FieldValue, FormValues};
