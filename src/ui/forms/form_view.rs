//! Generic form view driven by a form definition

use super::field_renderer::{draw_error_line, draw_field, field_height};
use crate::state::FormState;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw any form: message banner, one box per field with its error line,
/// then the submit button
pub fn draw_form(frame: &mut Frame, area: Rect, form: &FormState) {
    let block = Block::default()
        .title(format!(" {} ", form.definition.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)]; // message banner
    for field in &form.definition.fields {
        constraints.push(Constraint::Length(field_height(field)));
        constraints.push(Constraint::Length(1)); // error line
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    if let Some(message) = &form.message {
        let banner = Paragraph::new(Line::from(Span::styled(
            message.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(banner, chunks[0]);
    }

    for (idx, field) in form.definition.fields.iter().enumerate() {
        let value = form
            .values
            .get(&field.name)
            .cloned()
            .unwrap_or_else(|| field.default_value());
        let is_active = form.active_field_index == idx;
        draw_field(
            frame,
            chunks[1 + idx * 2],
            field,
            &value,
            is_active,
            form.option_cursor,
        );
        draw_error_line(frame, chunks[2 + idx * 2], form.errors.get(&field.name));
    }

    let button_row = chunks[1 + form.definition.fields.len() * 2];
    let button_area = Rect {
        width: button_row.width.min(20),
        ..button_row
    };
    let label = if form.submitting {
        "Submitting…"
    } else {
        "Submit"
    };
    render_button(
        frame,
        button_area,
        label,
        form.is_submit_row_active(),
        form.submit_enabled && !form.submitting,
    );
}
