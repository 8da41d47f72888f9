//! Scan dialog and its decoding collaborator

pub mod decoder;
pub mod dialog;

pub use decoder::{DecodeError, DecodeEvent, Input};
pub use dialog::ScanDialog;
