//! Error handling for the tracking module

use crate::consts::tracker_consts::TAMPERING_ALERT;
use thiserror::Error;

/// Why a completed scan was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The decoder reported an empty payload.
    #[error("scan returned an empty payload")]
    EmptyPayload,

    /// The container seal was already reported as compromised.
    #[error("container security is compromised")]
    Compromised,
}

impl ScanError {
    /// The message presented to the operator. Both causes read the same way.
    pub fn alert_message(&self) -> &'static str {
        TAMPERING_ALERT
    }
}
