//! Tracking state snapshot
//!
//! Everything the dashboard shows about the container lives here.

use crate::consts::tracker_consts::{
    INITIAL_TEMPERATURE, SEED_EVENTS, TEMPERATURE_WARNING_THRESHOLD,
};
use std::collections::VecDeque;

/// One milestone in the container's journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub event: String,
    pub location: String,
}

impl LogEntry {
    pub fn new(
        timestamp: impl Into<String>,
        event: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            event: event.into(),
            location: location.into(),
        }
    }
}

/// Snapshot of the simulated container.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingState {
    /// Container temperature in °C.
    pub temperature: f64,
    /// Display name of the container's current position.
    pub location: String,
    /// Whether the seal is intact. Once false it stays false.
    pub is_secure: bool,
    /// Whether the post-scan visual confirmation is showing.
    pub show_visual_confirmation: bool,
    /// Alert messages, newest first.
    pub notifications: VecDeque<String>,
    /// Whether the scan dialog is mounted.
    pub is_scanning: bool,
    /// Event log, newest first.
    pub events: VecDeque<LogEntry>,
    /// Identifies the confirmation window currently showing.
    pub confirmation_epoch: u64,
}

impl TrackingState {
    /// Creates the initial state for a container reported at `location`.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            temperature: INITIAL_TEMPERATURE,
            location: location.into(),
            is_secure: true,
            show_visual_confirmation: false,
            notifications: VecDeque::new(),
            is_scanning: false,
            events: SEED_EVENTS
                .iter()
                .map(|(timestamp, event, location)| LogEntry::new(*timestamp, *event, *location))
                .collect(),
            confirmation_epoch: 0,
        }
    }

    /// Whether the temperature should be rendered as a warning.
    pub fn temperature_warning(&self) -> bool {
        self.temperature > TEMPERATURE_WARNING_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = TrackingState::new("Port of Singapore");

        assert_eq!(state.temperature, 23.5);
        assert!(state.is_secure);
        assert!(!state.show_visual_confirmation);
        assert!(!state.is_scanning);
        assert!(state.notifications.is_empty());
        assert!(!state.temperature_warning());
    }

    #[test]
    // The seeded journey is ordered newest first.
    fn test_seed_events_newest_first() {
        let state = TrackingState::new("Port of Singapore");

        assert_eq!(state.events.len(), 4);
        assert_eq!(state.events[0].event, "Arrived at checkpoint");
        assert_eq!(state.events[3].event, "Container sealed at origin");
        assert!(
            state
                .events
                .iter()
                .zip(state.events.iter().skip(1))
                .all(|(newer, older)| newer.timestamp > older.timestamp)
        );
    }

    #[test]
    fn test_temperature_warning_threshold() {
        let mut state = TrackingState::new("Port of Singapore");
        state.temperature = 25.0;
        assert!(!state.temperature_warning());
        state.temperature = 25.1;
        assert!(state.temperature_warning());
    }
}
