//! Scan dialog
//!
//! Hosts a decoder while the dashboard is scanning and turns its results into
//! dashboard actions. The dialog owns no tracking state.

use super::decoder::{DecodeEvent, Decoder, Input, KeypadDecoder};
use crate::tracking::Action;
use log::error;

#[derive(Debug)]
pub struct ScanDialog {
    decoder: Box<dyn Decoder>,
}

impl ScanDialog {
    pub fn new(decoder: Box<dyn Decoder>) -> Self {
        Self { decoder }
    }

    /// Dialog backed by terminal key entry.
    pub fn with_keypad() -> Self {
        Self::new(Box::new(KeypadDecoder::new()))
    }

    /// Mounts or unmounts the dialog in `slot` to match `is_scanning`.
    ///
    /// An already mounted dialog is kept as is, so its decoder state survives
    /// repeated open requests.
    pub fn reconcile(slot: &mut Option<ScanDialog>, is_scanning: bool) {
        match (is_scanning, slot.is_some()) {
            (true, false) => *slot = Some(Self::with_keypad()),
            (false, true) => *slot = None,
            _ => {}
        }
    }

    /// Forwards a decoded payload verbatim; decode failures are only logged.
    pub fn on_decode_event(&self, event: DecodeEvent) -> Option<Action> {
        match event {
            DecodeEvent::Decoded(payload) => Some(Action::ScanCompleted(payload)),
            DecodeEvent::Failed(e) => {
                error!("QR decode failed: {}", e);
                None
            }
        }
    }

    /// Feeds raw input to the decoder.
    pub fn handle_input(&mut self, input: Input) -> Option<Action> {
        let event = self.decoder.feed(input)?;
        self.on_decode_event(event)
    }

    /// The close affordance, available whatever the decoder is doing.
    pub fn close(&self) -> Action {
        Action::CloseScanner
    }

    pub fn preview(&self) -> &str {
        self.decoder.preview()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::decoder::DecodeError;

    #[test]
    fn test_decoded_payload_becomes_scan_completion() {
        let dialog = ScanDialog::with_keypad();
        assert_eq!(
            dialog.on_decode_event(DecodeEvent::Decoded("ABC".to_string())),
            Some(Action::ScanCompleted("ABC".to_string()))
        );
        // Empty payloads are not filtered here
        assert_eq!(
            dialog.on_decode_event(DecodeEvent::Decoded(String::new())),
            Some(Action::ScanCompleted(String::new()))
        );
    }

    #[test]
    fn test_decode_errors_are_swallowed() {
        let dialog = ScanDialog::with_keypad();
        assert_eq!(
            dialog.on_decode_event(DecodeEvent::Failed(DecodeError::Device(
                "camera unplugged".to_string()
            ))),
            None
        );
    }

    #[test]
    fn test_keypad_input_flows_through() {
        let mut dialog = ScanDialog::with_keypad();
        assert_eq!(dialog.handle_input(Input::Char('Z')), None);
        assert_eq!(dialog.preview(), "Z");
        assert_eq!(
            dialog.handle_input(Input::Submit),
            Some(Action::ScanCompleted("Z".to_string()))
        );
        assert_eq!(dialog.handle_input(Input::Submit), None);
    }

    #[test]
    fn test_close_is_always_available() {
        let mut dialog = ScanDialog::with_keypad();
        dialog.handle_input(Input::Char('Q'));
        assert_eq!(dialog.close(), Action::CloseScanner);
    }

    #[test]
    fn test_reconcile_mounts_and_unmounts() {
        let mut slot = None;
        ScanDialog::reconcile(&mut slot, true);
        assert!(slot.is_some());

        slot.as_mut().unwrap().handle_input(Input::Char('K'));
        ScanDialog::reconcile(&mut slot, true);
        assert_eq!(slot.as_ref().unwrap().preview(), "K");

        ScanDialog::reconcile(&mut slot, false);
        assert!(slot.is_none());
    }
}
