//! Notification banner component

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Rows the banner needs: nothing when empty, one per notification plus borders otherwise.
pub fn banner_height(state: &DashboardState) -> u16 {
    match state.tracking().notifications.len() {
        0 => 0,
        n => n as u16 + 2,
    }
}

pub fn render_notifications(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let notifications = &state.tracking().notifications;
    if notifications.is_empty() || area.height == 0 {
        return;
    }

    let lines: Vec<Line> = notifications
        .iter()
        .map(|msg| {
            Line::from(vec![
                Span::styled("▲ ", Style::default().fg(Color::LightRed)),
                Span::styled(msg.as_str(), Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let block = Block::default()
        .title("NOTIFICATIONS [N] dismiss")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
