//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a field box, not counting its error line
pub fn field_height(field: &FormField) -> u16 {
    match &field.kind {
        FieldKind::Checkboxes { options } => options.len() as u16 + 2,
        _ => 3,
    }
}

fn focus_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a form field bound to its current value
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    value: &FieldValue,
    is_active: bool,
    option_cursor: usize,
) {
    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));

    let content = match &field.kind {
        FieldKind::Text { placeholder } => {
            let text = value.as_text();
            let mut spans = if text.is_empty() {
                vec![Span::styled(
                    placeholder.clone(),
                    Style::default().fg(Color::DarkGray),
                )]
            } else {
                vec![Span::raw(text.to_string())]
            };
            if is_active {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            vec![Line::from(spans)]
        }
        FieldKind::Select { .. } => {
            let label = field.display_value(value);
            let style = if value.as_text().is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            vec![Line::from(vec![
                Span::styled("◀ ", focus_style(is_active)),
                Span::styled(label, style),
                Span::styled(" ▶", focus_style(is_active)),
            ])]
        }
        FieldKind::Checkboxes { options } => options
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                let mark = if value.contains(&option.value) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let style = if is_active && idx == option_cursor {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("{mark} {}", option.label), style))
            })
            .collect(),
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw the inline validation message under a field (blank when valid)
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: &str) {
    if message.is_empty() {
        return;
    }
    let line = Paragraph::new(Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(line, area);
}
