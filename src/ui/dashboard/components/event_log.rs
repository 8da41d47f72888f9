//! Event log panel component
//!
//! Renders the container's journey, newest first

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_event_log(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();
    for entry in &state.tracking().events {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Indexed(99))),
            Span::styled(entry.timestamp.as_str(), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("│ "),
            Span::styled(
                entry.event.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("│ "),
            Span::styled(entry.location.as_str(), Style::default().fg(Color::Gray)),
        ]));
    }

    let block = Block::default()
        .title("BLOCKCHAIN LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
