//! Visual verification panel
//!
//! Shows the confirmation animation after a successful scan and lists the controls

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

pub fn render_verification_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let outer = Block::default()
        .title("VISUAL VERIFICATION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(4)])
        .split(inner);

    if state.tracking().show_visual_confirmation {
        render_confirmation(f, chunks[0], state.tick);
    } else {
        let idle = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "[ no active verification ]",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(idle, chunks[0]);
    }

    let controls = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("[S] ", Style::default().fg(Color::Indexed(99))),
            Span::raw("Scan QR Code"),
        ]),
        Line::from(vec![
            Span::styled("[A] ", Style::default().fg(Color::Yellow)),
            Span::raw("Simulate Alert"),
        ]),
        Line::from(vec![
            Span::styled("[N] ", Style::default().fg(Color::Gray)),
            Span::raw("Dismiss Notifications"),
        ]),
    ])
    .block(Block::default().borders(Borders::TOP).title("CONTROLS"));
    f.render_widget(controls, chunks[1]);
}

fn render_confirmation(f: &mut Frame, area: Rect, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    let banner = Paragraph::new(Span::styled(
        "✔ CONTAINER VERIFIED",
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(banner, chunks[0]);

    // Sweeping scan line, loops every 20 ticks
    let progress = ((tick % 20) as f64 / 20.0 * 100.0) as u16;
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
        .gauge_style(Style::default().fg(Color::LightGreen))
        .percent(progress)
        .label("AR overlay");
    f.render_widget(gauge, chunks[1]);
}
