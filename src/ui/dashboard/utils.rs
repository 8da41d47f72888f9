//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use crate::tracking::TrackingState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

/// Get a ratatui color for an activity source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Dashboard => Color::Yellow,
        Source::Scanner => Color::Cyan,
        Source::Timer => Color::DarkGray,
    }
}

/// Color of the temperature reading
pub fn temperature_color(state: &TrackingState) -> Color {
    if state.temperature_warning() {
        Color::Red
    } else {
        Color::Green
    }
}

/// Temperature with one decimal, e.g. `23.5°C`
pub fn format_temperature(temperature: f64) -> String {
    format!("{:.1}°C", temperature)
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Rectangle of `percent_x` by `height` rows centered in `area`
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x.min(100)) / 2),
            Constraint::Percentage(percent_x.min(100)),
            Constraint::Percentage((100 - percent_x.min(100)) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-03-15 09:15:00"), "03-15 09:15");
        assert_eq!(format_compact_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(23.5), "23.5°C");
        assert_eq!(format_temperature(29.0), "29.0°C");
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect.height, 10);
        assert!((49..=50).contains(&rect.width));
        assert!(rect.x >= 20 && rect.y >= 10);
    }
}
