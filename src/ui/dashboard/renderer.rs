//! Dashboard main renderer

use super::components::{
    alert, event_log, footer, header, notifications, scan_dialog, status, verification,
};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(notifications::banner_height(state)),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    notifications::render_notifications(f, main_chunks[1], state);
    status::render_status_section(f, main_chunks[2], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[3]);

    verification::render_verification_panel(f, content_chunks[0], state);
    event_log::render_event_log(f, content_chunks[1], state);
    footer::render_footer(f, main_chunks[4], state);

    // Overlays last so they sit on top
    if let Some(dialog) = state.scan_dialog() {
        scan_dialog::render_scan_dialog(f, dialog);
    }
    if let Some(error) = state.pending_alert() {
        alert::render_alert(f, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::{
        Action, ConfirmationTimer, RngEntropy, SystemClock, Tracker, TrackingState,
    };
    use crate::ui::app::UIConfig;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::{Duration, Instant};
    use tokio::sync::mpsc;

    fn dashboard() -> DashboardState {
        let (tx, _rx) = mpsc::channel(4);
        let tracker = Tracker::new(
            TrackingState::new("Port of Singapore"),
            Box::new(RngEntropy::seeded(11)),
            Box::new(SystemClock),
            ConfirmationTimer::new(Duration::from_millis(3000), tx),
        );
        DashboardState::new(tracker, Instant::now(), UIConfig::new(true))
    }

    fn screen_text(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_renders_initial_dashboard() {
        let text = screen_text(&dashboard());

        assert!(text.contains("SECURETRACK"));
        assert!(text.contains("23.5°C"));
        assert!(text.contains("Port of Singapore"));
        assert!(text.contains("Secure"));
        assert!(text.contains("Arrived at checkpoint"));
        assert!(!text.contains("SCAN CONTAINER QR CODE"));
    }

    #[tokio::test]
    async fn test_renders_notifications_and_dialog() {
        let mut state = dashboard();
        state.dispatch(Action::SimulateAlert);
        state.dispatch(Action::OpenScanner);

        let text = screen_text(&state);
        assert!(text.contains("25.5°C"));
        assert!(text.contains(state.tracking().notifications[0].as_str()));
        assert!(text.contains("SCAN CONTAINER QR CODE"));
    }

    #[tokio::test]
    async fn test_renders_tampering_alert() {
        let mut state = dashboard();
        state.dispatch(Action::OpenScanner);
        state.dispatch(Action::ScanCompleted(String::new()));

        let text = screen_text(&state);
        assert!(text.contains("Access denied: Container tampering detected!"));
    }
}
