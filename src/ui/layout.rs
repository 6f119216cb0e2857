//! Layout components (title, navigation bar, status bar)

use super::components::{render_nav_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Navigation items: key hint, label, target view
const NAV_ITEMS: &[(&str, &str, View)] = &[
    ("F1", "Home", View::Home),
    ("F2", "Information", View::Information),
];

/// Areas of the main screen
pub struct ScreenAreas {
    pub title: Rect,
    pub nav: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Create the main layout: title, nav bar, content, status bar
pub fn create_layout(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // App title
            Constraint::Length(BUTTON_HEIGHT), // Nav buttons
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    ScreenAreas {
        title: chunks[0],
        nav: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}

pub fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        " My App",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}

/// Draw the navigation bar with boxed buttons
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> =
        NAV_ITEMS.iter().map(|_| Constraint::Length(18)).collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, (key, label, view)) in NAV_ITEMS.iter().enumerate() {
        let is_selected = app.state.current_view == *view;
        render_nav_button(frame, chunks[idx], key, label, is_selected);
    }
}

/// Key hints for the current view
fn status_hints(view: View) -> &'static str {
    match view {
        View::Home => "Enter/o: order  i: information  q: quit",
        View::Order | View::Information => {
            "Tab: next  ←/→: size  Space: toggle  Ctrl+S: submit  Esc: home"
        }
        View::NotFound => "q: quit",
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {}", status_hints(app.state.current_view)),
        Style::default().fg(Color::DarkGray),
    )];
    if app.state.active_form().is_some_and(|f| f.errors.has_any()) {
        spans.push(Span::styled(
            "  fix the highlighted fields",
            Style::default().fg(Color::Red),
        ));
    }
    if let Some(path) = app.state.current_view.path() {
        spans.push(Span::styled(
            format!("  {path}"),
            Style::default().fg(Color::Cyan),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
