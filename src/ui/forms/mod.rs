//! Form rendering module
//!
//! - `field_renderer`: per-field widgets and inline errors
//! - `form_view`: the one renderer shared by every form

mod field_renderer;
mod form_view;

pub use form_view::draw_form;
