//! Dashboard state management
//!
//! Contains the dashboard state struct wrapping the tracker with view-only data

use crate::consts::tracker_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::scanner::ScanDialog;
use crate::tracking::{Action, ScanError, Tracker, TrackingState};
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// Dashboard state: the live tracker plus everything only the screen needs.
#[derive(Debug)]
pub struct DashboardState {
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
    /// Timer actions waiting to be applied
    pub pending_actions: VecDeque<Action>,
    /// Activity feed, oldest first
    pub activity_logs: VecDeque<Event>,

    /// Owner of the tracking state
    tracker: Tracker,
    /// Mounted while the tracker is scanning
    scan_dialog: Option<ScanDialog>,
    /// Rejected scan waiting for acknowledgement; blocks other input
    pending_alert: Option<ScanError>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(tracker: Tracker, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            start_time,
            with_background_color: ui_config.with_background_color,
            tick: 0,
            pending_actions: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tracker,
            scan_dialog: None,
            pending_alert: None,
        }
    }

    pub fn tracking(&self) -> &TrackingState {
        self.tracker.state()
    }

    pub fn scan_dialog(&self) -> Option<&ScanDialog> {
        self.scan_dialog.as_ref()
    }

    pub fn pending_alert(&self) -> Option<&ScanError> {
        self.pending_alert.as_ref()
    }

    pub(super) fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }

    pub(super) fn scan_dialog_slot(&mut self) -> &mut Option<ScanDialog> {
        &mut self.scan_dialog
    }

    pub(super) fn set_pending_alert(&mut self, alert: Option<ScanError>) {
        self.pending_alert = alert;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Queue a timer action for the next update
    pub fn add_action(&mut self, action: Action) {
        self.pending_actions.push_back(action);
    }
}
