//! Event System
//!
//! Activity events describing what each dispatched action did, shown in the
//! dashboard footer and printed in headless mode.

use crate::logging::{LogLevel, should_log_with_env};
use crate::tracking::{Action, ScanError, TrackingState};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// Dashboard controls: alerts and notifications.
    Dashboard,
    /// The scan dialog and its decoder.
    Scanner,
    /// The confirmation timer.
    Timer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Alert,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    /// Describes the outcome of `action`, given the snapshot it produced.
    pub fn from_dispatch(
        action: &Action,
        result: &Result<(), ScanError>,
        state: &TrackingState,
    ) -> Self {
        match (action, result) {
            (Action::OpenScanner, _) => Self::new(
                Source::Scanner,
                "Scanner opened, waiting for a container code".to_string(),
                EventType::Waiting,
                LogLevel::Info,
            ),
            (Action::ScanCompleted(_), Ok(())) => Self::new(
                Source::Scanner,
                format!("QR Code verified successfully at {}", state.location),
                EventType::Success,
                LogLevel::Info,
            ),
            (Action::ScanCompleted(_), Err(e)) => Self::new(
                Source::Scanner,
                format!("{} ({})", e.alert_message(), e),
                EventType::Error,
                LogLevel::Error,
            ),
            (Action::CloseScanner, _) => Self::new(
                Source::Scanner,
                "Scanner closed".to_string(),
                EventType::Refresh,
                LogLevel::Info,
            ),
            (Action::SimulateAlert, _) => {
                let latest = state.notifications.front().map_or("", String::as_str);
                let seal = if state.is_secure { "secure" } else { "compromised" };
                Self::new(
                    Source::Dashboard,
                    format!("{} - {:.1}°C, seal {}", latest, state.temperature, seal),
                    EventType::Alert,
                    LogLevel::Warn,
                )
            }
            (Action::DismissNotifications, _) => Self::new(
                Source::Dashboard,
                "Notifications dismissed".to_string(),
                EventType::Refresh,
                LogLevel::Info,
            ),
            (Action::ConfirmationElapsed { epoch }, _) => {
                let msg = if *epoch == state.confirmation_epoch {
                    format!("Confirmation window {} elapsed, visual confirmation cleared", epoch)
                } else {
                    // A newer scan owns the window
                    format!("Confirmation window {} superseded", epoch)
                };
                Self::new(Source::Timer, msg, EventType::Refresh, LogLevel::Info)
            }
        }
    }

    pub fn should_display(&self) -> bool {
        // Always show successes and anything at info or above
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TrackingState {
        TrackingState::new("Port of Singapore")
    }

    #[test]
    fn test_rejected_scan_event_carries_alert() {
        let event = Event::from_dispatch(
            &Action::ScanCompleted(String::new()),
            &Err(ScanError::EmptyPayload),
            &state(),
        );

        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.source, Source::Scanner);
        assert!(event.msg.starts_with("Access denied: Container tampering detected!"));
        assert!(event.should_display());
    }

    #[test]
    fn test_alert_event_summarises_state() {
        let mut s = state();
        s.notifications.push_front("Unusual movement detected".to_string());
        s.temperature = 25.5;
        s.is_secure = false;

        let event = Event::from_dispatch(&Action::SimulateAlert, &Ok(()), &s);
        assert_eq!(
            event.msg,
            "Unusual movement detected - 25.5°C, seal compromised"
        );
    }

    #[test]
    fn test_confirmation_elapsed_is_displayed() {
        let mut s = state();
        s.confirmation_epoch = 2;

        let current =
            Event::from_dispatch(&Action::ConfirmationElapsed { epoch: 2 }, &Ok(()), &s);
        assert_eq!(current.source, Source::Timer);
        assert_eq!(current.log_level, LogLevel::Info);
        assert!(current.msg.ends_with("visual confirmation cleared"));
        assert!(current.should_display());

        let stale = Event::from_dispatch(&Action::ConfirmationElapsed { epoch: 1 }, &Ok(()), &s);
        assert_eq!(stale.msg, "Confirmation window 1 superseded");
        assert!(stale.should_display());
    }

    #[test]
    fn test_display_format() {
        let event = Event::from_dispatch(&Action::CloseScanner, &Ok(()), &state());
        let text = event.to_string();
        assert!(text.starts_with("Refresh ["));
        assert!(text.ends_with("] Scanner closed"));
    }
}
