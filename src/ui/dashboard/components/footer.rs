//! Dashboard footer component
//!
//! Renders key hints and the most recent activity

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_source_color};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let uptime = state.start_time.elapsed().as_secs();
    let mut spans = vec![
        Span::styled(
            "[Q] Quit | SecureTrack Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" | Uptime {}m {}s", uptime / 60, uptime % 60),
            Style::default().fg(Color::LightGreen),
        ),
    ];

    if let Some(event) = state
        .activity_logs
        .iter()
        .rev()
        .find(|event| event.should_display())
    {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            event.msg.as_str(),
            Style::default().fg(get_source_color(&event.source)),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
