//! Home view

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PIZZA_ART: &[&str] = &[
    r"     _....._     ",
    r"  .-'  o  . '-.  ",
    r" / .  o   o  . \ ",
    r"|  o  .  o  o   |",
    r" \ .  o  .   o / ",
    r"  '-._  o  _.-'  ",
    r"      '---'      ",
];

pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                      // Heading
            Constraint::Length(PIZZA_ART.len() as u16), // Pizza
            Constraint::Length(2),                      // Call to action
            Constraint::Min(0),
        ])
        .split(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Welcome to Bloom Pizza!",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let art: Vec<Line> = PIZZA_ART
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::LightRed))))
        .collect();
    frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), chunks[1]);

    let call = Paragraph::new(Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to order a pizza"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(call, chunks[2]);
}
