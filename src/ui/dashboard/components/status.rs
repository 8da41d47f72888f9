//! Dashboard status components
//!
//! Renders the temperature, location and security panels

use super::super::state::DashboardState;
use super::super::utils::{format_temperature, temperature_color};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_status_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let tracking = state.tracking();

    let temp_color = temperature_color(tracking);
    render_panel(
        f,
        chunks[0],
        "TEMPERATURE",
        temp_color,
        Span::styled(
            format_temperature(tracking.temperature),
            Style::default().fg(temp_color).add_modifier(Modifier::BOLD),
        ),
    );

    render_panel(
        f,
        chunks[1],
        "LOCATION",
        Color::Blue,
        Span::styled(
            tracking.location.as_str(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
    );

    let (label, color) = if tracking.is_secure {
        ("✔ Secure", Color::Green)
    } else {
        ("✘ Compromised", Color::Red)
    };
    render_panel(
        f,
        chunks[2],
        "SECURITY STATUS",
        color,
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    );
}

fn render_panel(f: &mut Frame, area: Rect, title: &str, accent: Color, value: Span) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(value)])
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}
