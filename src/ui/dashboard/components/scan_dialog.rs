//! Scan dialog overlay

use super::super::utils::centered_rect;
use crate::scanner::ScanDialog;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

pub fn render_scan_dialog(f: &mut Frame, dialog: &ScanDialog) {
    let area = centered_rect(50, 11, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "┌────────────────────────────┐",
            Style::default().fg(Color::Indexed(99)),
        )),
        Line::from(vec![
            Span::styled("│ ", Style::default().fg(Color::Indexed(99))),
            Span::styled(
                format!("{:<26}", dialog.preview()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │", Style::default().fg(Color::Indexed(99))),
        ]),
        Line::from(Span::styled(
            "└────────────────────────────┘",
            Style::default().fg(Color::Indexed(99)),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Point your camera at the container's QR code",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "[Enter] Read code | [Esc] Close Scanner",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let block = Block::default()
        .title("SCAN CONTAINER QR CODE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Indexed(99)))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}
