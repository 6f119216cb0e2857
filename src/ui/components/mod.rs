//! Reusable UI components

mod button;

pub use button::{render_button, render_nav_button, BUTTON_HEIGHT};
