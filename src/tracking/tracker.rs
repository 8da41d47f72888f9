//! Tracking runtime
//!
//! Owns the live snapshot and the capabilities transitions need, applies each
//! action and performs the resulting effect.

use super::entropy::{Clock, Entropy};
use super::error::ScanError;
use super::state::TrackingState;
use super::timer::ConfirmationTimer;
use super::transitions::{Action, Effect, Transition, transition};
use log::{debug, info, warn};

pub struct Tracker {
    state: TrackingState,
    entropy: Box<dyn Entropy>,
    clock: Box<dyn Clock>,
    timer: ConfirmationTimer,
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("state", &self.state)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

impl Tracker {
    pub fn new(
        state: TrackingState,
        entropy: Box<dyn Entropy>,
        clock: Box<dyn Clock>,
        timer: ConfirmationTimer,
    ) -> Self {
        Self {
            state,
            entropy,
            clock,
            timer,
        }
    }

    pub fn state(&self) -> &TrackingState {
        &self.state
    }

    /// Applies `action`, installs the next snapshot and runs its effect.
    ///
    /// The state advances even when a scan is rejected; the error only tells
    /// the caller what to present.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ScanError> {
        let Transition {
            next,
            effect,
            result,
        } = transition(
            &self.state,
            &action,
            self.entropy.as_mut(),
            self.clock.as_ref(),
        );
        self.state = next;

        match effect {
            Effect::StartConfirmationTimer { epoch } => self.timer.start(epoch),
            Effect::None => {}
        }

        match &result {
            Ok(()) if matches!(action, Action::ScanCompleted(_)) => {
                info!("Scan accepted at {}", self.state.location);
            }
            Ok(()) => debug!("Applied {:?}", action),
            Err(e) => warn!("Scan rejected: {}", e),
        }
        result
    }

    /// Whether a confirmation window is counting down.
    pub fn confirmation_pending(&self) -> bool {
        self.timer.is_pending()
    }
}
