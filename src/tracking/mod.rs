//! Container tracking domain
//!
//! Pure state transitions over a [`TrackingState`] snapshot, plus the
//! [`Tracker`] runtime that applies them and drives the confirmation timer.

pub mod entropy;
pub mod error;
pub mod state;
pub mod timer;
pub mod tracker;
pub mod transitions;

pub use entropy::{Entropy, RngEntropy, SystemClock};
pub use error::ScanError;
pub use state::TrackingState;
pub use timer::ConfirmationTimer;
pub use tracker::Tracker;
pub use transitions::Action;
