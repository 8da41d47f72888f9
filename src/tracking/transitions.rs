//! State transitions
//!
//! Every interaction is an [`Action`] applied to a snapshot. `transition`
//! returns the next snapshot without touching the input, together with the
//! side effect the runtime must perform and, for scans, the outcome.

use super::entropy::{Clock, Entropy};
use super::error::ScanError;
use super::state::{LogEntry, TrackingState};
use crate::consts::tracker_consts::{
    ALERT_MESSAGES, ALERT_TEMPERATURE_STEP, MAX_NOTIFICATIONS, VERIFIED_EVENT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Mount the scan dialog.
    OpenScanner,
    /// The decoder produced a payload.
    ScanCompleted(String),
    /// Unmount the scan dialog without a result.
    CloseScanner,
    /// Raise a random alert.
    SimulateAlert,
    /// Clear every notification.
    DismissNotifications,
    /// The confirmation window identified by `epoch` ran out.
    ConfirmationElapsed { epoch: u64 },
}

/// Work the runtime performs after installing the next snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Schedule `ConfirmationElapsed { epoch }`, replacing any pending window.
    StartConfirmationTimer { epoch: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: TrackingState,
    pub effect: Effect,
    pub result: Result<(), ScanError>,
}

impl Transition {
    fn quiet(next: TrackingState) -> Self {
        Self {
            next,
            effect: Effect::None,
            result: Ok(()),
        }
    }
}

/// Computes the snapshot following `action`.
pub fn transition(
    state: &TrackingState,
    action: &Action,
    entropy: &mut dyn Entropy,
    clock: &dyn Clock,
) -> Transition {
    match action {
        Action::OpenScanner => Transition::quiet(TrackingState {
            is_scanning: true,
            ..state.clone()
        }),
        Action::CloseScanner => Transition::quiet(TrackingState {
            is_scanning: false,
            ..state.clone()
        }),
        Action::ScanCompleted(payload) => complete_scan(state, payload, clock),
        Action::SimulateAlert => Transition::quiet(simulate_alert(state, entropy)),
        Action::DismissNotifications => {
            let mut next = state.clone();
            next.notifications.clear();
            Transition::quiet(next)
        }
        Action::ConfirmationElapsed { epoch } => {
            let mut next = state.clone();
            if *epoch == state.confirmation_epoch {
                next.show_visual_confirmation = false;
            }
            Transition::quiet(next)
        }
    }
}

fn complete_scan(state: &TrackingState, payload: &str, clock: &dyn Clock) -> Transition {
    let mut next = state.clone();
    next.is_scanning = false;

    let rejection = if payload.is_empty() {
        Some(ScanError::EmptyPayload)
    } else if !state.is_secure {
        Some(ScanError::Compromised)
    } else {
        None
    };

    if let Some(err) = rejection {
        return Transition {
            next,
            effect: Effect::None,
            result: Err(err),
        };
    }

    next.show_visual_confirmation = true;
    next.confirmation_epoch += 1;
    next.events.push_front(LogEntry::new(
        clock.timestamp(),
        VERIFIED_EVENT,
        state.location.clone(),
    ));

    Transition {
        effect: Effect::StartConfirmationTimer {
            epoch: next.confirmation_epoch,
        },
        next,
        result: Ok(()),
    }
}

fn simulate_alert(state: &TrackingState, entropy: &mut dyn Entropy) -> TrackingState {
    let mut next = state.clone();

    // Draw order matters for seeded runs: message first, then the breach roll.
    let index = entropy
        .alert_index(ALERT_MESSAGES.len())
        .min(ALERT_MESSAGES.len() - 1);
    next.notifications
        .push_front(ALERT_MESSAGES[index].to_string());
    next.notifications.truncate(MAX_NOTIFICATIONS);

    next.temperature += ALERT_TEMPERATURE_STEP;

    if entropy.breach() {
        next.is_secure = false;
    }
    next
}
