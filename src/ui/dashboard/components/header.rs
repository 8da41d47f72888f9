//! Dashboard header component
//!
//! Renders the product title and the notification counter

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and notification bell.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(18)])
        .split(area);

    let title = Paragraph::new(format!(
        "▣ SECURETRACK™  v{}",
        env!("CARGO_PKG_VERSION")
    ))
    .alignment(Alignment::Left)
    .style(
        Style::default()
            .fg(Color::Indexed(99))
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    // Bell with a badge once anything is pending
    let count = state.tracking().notifications.len();
    let (bell_text, bell_color) = if count > 0 {
        (format!("Alerts [{}]", count), Color::LightRed)
    } else {
        ("Alerts".to_string(), Color::Gray)
    };
    let bell = Paragraph::new(bell_text)
        .alignment(Alignment::Right)
        .style(Style::default().fg(bell_color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(bell, header_chunks[1]);
}
