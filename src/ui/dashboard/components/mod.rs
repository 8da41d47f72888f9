//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod alert;
pub mod event_log;
pub mod footer;
pub mod header;
pub mod notifications;
pub mod scan_dialog;
pub mod status;
pub mod verification;
