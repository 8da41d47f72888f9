//! Dashboard state update logic
//!
//! Key handling and action dispatch for the dashboard screen

use super::state::DashboardState;

use crate::events::Event;
use crate::scanner::{Input, ScanDialog};
use crate::tracking::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the event loop should do after a key press.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

impl DashboardState {
    /// Advance the animation tick and apply queued timer actions.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(action) = self.pending_actions.pop_front() {
            self.dispatch(action);
        }
    }

    /// Apply one action to the tracker and reflect the outcome on screen.
    pub fn dispatch(&mut self, action: Action) {
        let result = self.tracker_mut().dispatch(action.clone());
        let event = Event::from_dispatch(&action, &result, self.tracking());
        self.add_to_activity_log(event);

        if let Err(e) = result {
            self.set_pending_alert(Some(e));
        }

        let is_scanning = self.tracking().is_scanning;
        ScanDialog::reconcile(self.scan_dialog_slot(), is_scanning);
    }

    /// Route a key press to the alert, the scan dialog or the dashboard controls.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        // The tampering alert blocks everything until acknowledged
        if self.pending_alert().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.set_pending_alert(None);
            }
            return KeyOutcome::Continue;
        }

        if let Some(dialog) = self.scan_dialog_slot().as_mut() {
            let action = match key.code {
                KeyCode::Esc => Some(dialog.close()),
                KeyCode::Enter => dialog.handle_input(Input::Submit),
                KeyCode::Backspace => dialog.handle_input(Input::Backspace),
                KeyCode::Char(c) => dialog.handle_input(Input::Char(c)),
                _ => None,
            };
            if let Some(action) = action {
                self.dispatch(action);
            }
            return KeyOutcome::Continue;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Char('s') => self.dispatch(Action::OpenScanner),
            KeyCode::Char('a') => self.dispatch(Action::SimulateAlert),
            KeyCode::Char('n') => self.dispatch(Action::DismissNotifications),
            _ => {}
        }
        KeyOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::{
        ConfirmationTimer, RngEntropy, ScanError, SystemClock, Tracker, TrackingState,
    };
    use crate::ui::app::UIConfig;
    use std::time::{Duration, Instant};
    use tokio::sync::mpsc;

    fn dashboard() -> (DashboardState, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel(4);
        let tracker = Tracker::new(
            TrackingState::new("Port of Singapore"),
            Box::new(RngEntropy::seeded(3)),
            Box::new(SystemClock),
            ConfirmationTimer::new(Duration::from_millis(3000), tx),
        );
        let state = DashboardState::new(tracker, Instant::now(), UIConfig::new(false));
        (state, rx)
    }

    fn press(state: &mut DashboardState, code: KeyCode) -> KeyOutcome {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_flow_through_keys() {
        let (mut state, mut rx) = dashboard();

        press(&mut state, KeyCode::Char('s'));
        assert!(state.tracking().is_scanning);
        assert!(state.scan_dialog().is_some());

        // Dashboard shortcuts are plain input while the dialog is open
        type_text(&mut state, "qa");
        assert_eq!(state.scan_dialog().unwrap().preview(), "qa");
        assert!(state.tracking().notifications.is_empty());

        press(&mut state, KeyCode::Enter);
        assert!(!state.tracking().is_scanning);
        assert!(state.scan_dialog().is_none());
        assert!(state.tracking().show_visual_confirmation);
        assert_eq!(state.tracking().events[0].event, "QR Code verified successfully");

        state.add_action(rx.recv().await.unwrap());
        state.update();
        assert!(!state.tracking().show_visual_confirmation);
    }

    #[tokio::test]
    async fn test_escape_closes_dialog_without_quitting() {
        let (mut state, _rx) = dashboard();
        press(&mut state, KeyCode::Char('s'));

        assert_eq!(press(&mut state, KeyCode::Esc), KeyOutcome::Continue);
        assert!(!state.tracking().is_scanning);
        assert!(state.scan_dialog().is_none());

        assert_eq!(press(&mut state, KeyCode::Esc), KeyOutcome::Quit);
    }

    #[tokio::test]
    // An empty submit is a decode failure: nothing visible happens.
    async fn test_empty_submit_keeps_dialog_open() {
        let (mut state, _rx) = dashboard();
        press(&mut state, KeyCode::Char('s'));
        let logged = state.activity_logs.len();

        press(&mut state, KeyCode::Enter);
        assert!(state.tracking().is_scanning);
        assert!(state.pending_alert().is_none());
        assert_eq!(state.activity_logs.len(), logged);
    }

    #[tokio::test]
    async fn test_rejected_scan_blocks_until_acknowledged() {
        let (mut state, _rx) = dashboard();
        // Alert until the seal breaks
        while state.tracking().is_secure {
            press(&mut state, KeyCode::Char('a'));
        }
        press(&mut state, KeyCode::Char('s'));
        type_text(&mut state, "SEAL");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.pending_alert(), Some(&ScanError::Compromised));
        assert!(state.scan_dialog().is_none());

        // Blocked: neither shortcuts nor quit get through
        let notifications = state.tracking().notifications.len();
        assert_eq!(press(&mut state, KeyCode::Char('n')), KeyOutcome::Continue);
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyOutcome::Continue);
        assert_eq!(state.tracking().notifications.len(), notifications);

        press(&mut state, KeyCode::Enter);
        assert!(state.pending_alert().is_none());
        press(&mut state, KeyCode::Char('n'));
        assert!(state.tracking().notifications.is_empty());
    }

    #[tokio::test]
    async fn test_alert_keys_update_tracking() {
        let (mut state, _rx) = dashboard();
        for _ in 0..7 {
            press(&mut state, KeyCode::Char('a'));
        }
        assert_eq!(state.tracking().notifications.len(), 5);
        assert_eq!(state.tracking().temperature, 37.5);
        assert_eq!(state.activity_logs.len(), 7);
    }

    #[tokio::test]
    async fn test_ctrl_c_always_quits() {
        let (mut state, _rx) = dashboard();
        press(&mut state, KeyCode::Char('s'));
        let outcome = state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(outcome, KeyOutcome::Quit);
    }
}
