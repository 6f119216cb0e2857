//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    // No route: only the status bar
    if app.state.current_view == View::NotFound {
        layout::draw_status_bar(frame, areas.status, app);
        return;
    }

    layout::draw_title(frame, areas.title);
    layout::draw_nav_bar(frame, areas.nav, app);

    match app.state.current_view {
        View::Home => home::draw(frame, areas.content),
        View::Order | View::Information => {
            if let Some(form) = app.state.active_form() {
                forms::draw_form(frame, areas.content, form);
            }
        }
        View::NotFound => {}
    }

    layout::draw_status_bar(frame, areas.status, app);
}
