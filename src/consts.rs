pub mod tracker_consts {
    //! Tracker Configuration Constants
    //!
    //! Fixed values for the simulated container, grouped by the part of the
    //! dashboard that consumes them.

    // =============================================================================
    // SENSOR SIMULATION
    // =============================================================================

    /// Temperature reported when the dashboard starts (°C).
    pub const INITIAL_TEMPERATURE: f64 = 23.5;

    /// Temperature increase applied by every simulated alert (°C).
    pub const ALERT_TEMPERATURE_STEP: f64 = 2.0;

    /// Temperatures above this are rendered as a warning (°C).
    pub const TEMPERATURE_WARNING_THRESHOLD: f64 = 25.0;

    /// Probability that a simulated alert compromises the container seal.
    pub const BREACH_PROBABILITY: f64 = 0.5;

    /// Messages a simulated alert picks from.
    pub const ALERT_MESSAGES: [&str; 3] = [
        "Temperature exceeded threshold: 28°C",
        "Unusual movement detected",
        "Container seal verification required",
    ];

    // =============================================================================
    // NOTIFICATIONS & EVENT LOG
    // =============================================================================

    /// Maximum number of notifications kept, newest first.
    pub const MAX_NOTIFICATIONS: usize = 5;

    /// Location shown when no configuration overrides it.
    pub const DEFAULT_LOCATION: &str = "Port of Singapore";

    /// Event log description recorded for an accepted scan.
    pub const VERIFIED_EVENT: &str = "QR Code verified successfully";

    /// Message shown when a scan is rejected.
    pub const TAMPERING_ALERT: &str = "Access denied: Container tampering detected!";

    /// Timestamp layout used by the event log.
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Journey history present when the dashboard starts, newest first.
    /// (timestamp, event, location)
    pub const SEED_EVENTS: [(&str, &str, &str); 4] = [
        (
            "2024-03-15 09:15:00",
            "Arrived at checkpoint",
            "Port of Singapore",
        ),
        ("2024-03-14 18:20:00", "Departed port", "Shanghai Port"),
        (
            "2024-03-14 14:45:00",
            "Temperature check passed",
            "Shanghai Port",
        ),
        (
            "2024-03-14 10:30:00",
            "Container sealed at origin",
            "Shanghai Port",
        ),
    ];

    // =============================================================================
    // SCANNING
    // =============================================================================

    /// Visual confirmation window after a successful scan
    pub mod confirmation {
        use std::time::Duration;

        /// How long the confirmation stays visible (milliseconds)
        pub const WINDOW_MS: u64 = 3000;

        /// Helper function to get the confirmation window duration
        pub const fn window() -> Duration {
            Duration::from_millis(WINDOW_MS)
        }
    }

    /// Longest payload the keypad decoder accepts before giving up on a frame.
    pub const MAX_PAYLOAD_LEN: usize = 512;

    // =============================================================================
    // EVENT LOOP
    // =============================================================================

    /// Buffer size of the channel carrying timer notifications
    pub const TIMER_QUEUE_SIZE: usize = 16;

    /// The maximum number of activity events kept for display.
    pub const MAX_ACTIVITY_LOGS: usize = 100;
}
