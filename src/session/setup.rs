//! Session setup and initialization

use crate::config::Config;
use crate::consts::tracker_consts::{TIMER_QUEUE_SIZE, confirmation};
use crate::tracking::{
    Action, ConfirmationTimer, Entropy, RngEntropy, SystemClock, Tracker, TrackingState,
};
use log::info;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Live tracker
    pub tracker: Tracker,
    /// Actions posted by the confirmation timer
    pub timer_receiver: mpsc::Receiver<Action>,
    /// Location being tracked (for display purposes)
    pub location: String,
}

/// Sets up a tracking session
///
/// This function handles the setup common to TUI and headless modes:
/// 1. Resolves the tracked location (`location_override` wins over the config)
/// 2. Chooses the entropy source (seeded when `seed` is given)
/// 3. Wires the confirmation timer to a fresh channel
pub fn setup_session(
    config: &Config,
    location_override: Option<String>,
    seed: Option<u64>,
) -> SessionData {
    let location = location_override.unwrap_or_else(|| config.location.clone());

    let entropy: Box<dyn Entropy> = match seed {
        Some(seed) => {
            info!("Using deterministic alert simulation with seed {}", seed);
            Box::new(RngEntropy::seeded(seed))
        }
        None => Box::new(RngEntropy::from_os()),
    };

    let (timer_sender, timer_receiver) = mpsc::channel(TIMER_QUEUE_SIZE);
    let timer = ConfirmationTimer::new(confirmation::window(), timer_sender);

    let tracker = Tracker::new(
        TrackingState::new(location.clone()),
        entropy,
        Box::new(SystemClock),
        timer,
    );

    SessionData {
        tracker,
        timer_receiver,
        location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_override_wins() {
        let config = Config::new("Port of Rotterdam".to_string());

        let session = setup_session(&config, Some("Port of Hamburg".to_string()), Some(1));
        assert_eq!(session.location, "Port of Hamburg");
        assert_eq!(session.tracker.state().location, "Port of Hamburg");

        let session = setup_session(&config, None, None);
        assert_eq!(session.tracker.state().location, "Port of Rotterdam");
    }
}
