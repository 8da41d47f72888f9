//! Tampering alert overlay

use super::super::utils::centered_rect;
use crate::tracking::ScanError;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

pub fn render_alert(f: &mut Frame, error: &ScanError) {
    let area = centered_rect(60, 8, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            error.alert_message(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Reason: {}", error),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(Color::Cyan))),
    ];

    let block = Block::default()
        .title("ALERT")
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
