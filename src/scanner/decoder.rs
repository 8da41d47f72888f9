//! Decoding collaborator
//!
//! A decoder consumes raw input from its capture surface and reports zero or
//! more decode results. Camera-backed decoders would feed frames; the bundled
//! [`KeypadDecoder`] reads a code typed at the terminal.

use crate::consts::tracker_consts::MAX_PAYLOAD_LEN;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Nothing readable was captured.
    #[error("no QR code found in frame")]
    NoCode,

    /// The captured code is longer than any container label.
    #[error("payload exceeds {max} characters")]
    Overflow { max: usize },

    /// The capture device itself failed.
    #[error("capture device error: {0}")]
    Device(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeEvent {
    Decoded(String),
    Failed(DecodeError),
}

/// Raw input delivered by the capture surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Char(char),
    Backspace,
    Submit,
}

pub trait Decoder: Send + std::fmt::Debug {
    /// Feeds one unit of input, returning a decode result when one is ready.
    fn feed(&mut self, input: Input) -> Option<DecodeEvent>;

    /// What the capture surface currently shows.
    fn preview(&self) -> &str;
}

#[derive(Debug, Default)]
pub struct KeypadDecoder {
    buffer: String,
}

impl KeypadDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder for KeypadDecoder {
    fn feed(&mut self, input: Input) -> Option<DecodeEvent> {
        match input {
            Input::Char(c) => {
                if self.buffer.chars().count() >= MAX_PAYLOAD_LEN {
                    self.buffer.clear();
                    return Some(DecodeEvent::Failed(DecodeError::Overflow {
                        max: MAX_PAYLOAD_LEN,
                    }));
                }
                self.buffer.push(c);
                None
            }
            Input::Backspace => {
                self.buffer.pop();
                None
            }
            Input::Submit if self.buffer.is_empty() => {
                Some(DecodeEvent::Failed(DecodeError::NoCode))
            }
            Input::Submit => Some(DecodeEvent::Decoded(std::mem::take(&mut self.buffer))),
        }
    }

    fn preview(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(decoder: &mut KeypadDecoder, text: &str) {
        for c in text.chars() {
            assert_eq!(decoder.feed(Input::Char(c)), None);
        }
    }

    #[test]
    fn test_submit_yields_payload_verbatim() {
        let mut decoder = KeypadDecoder::new();
        type_text(&mut decoder, " MSCU 1234567 ");

        assert_eq!(
            decoder.feed(Input::Submit),
            Some(DecodeEvent::Decoded(" MSCU 1234567 ".to_string()))
        );
        assert_eq!(decoder.preview(), "");
    }

    #[test]
    // The decoder keeps reading after a result: repeated submits produce repeated payloads.
    fn test_continuous_decoding() {
        let mut decoder = KeypadDecoder::new();
        type_text(&mut decoder, "A");
        assert!(matches!(decoder.feed(Input::Submit), Some(DecodeEvent::Decoded(_))));
        type_text(&mut decoder, "A");
        assert_eq!(
            decoder.feed(Input::Submit),
            Some(DecodeEvent::Decoded("A".to_string()))
        );
    }

    #[test]
    fn test_empty_submit_is_no_code() {
        let mut decoder = KeypadDecoder::new();
        assert_eq!(
            decoder.feed(Input::Submit),
            Some(DecodeEvent::Failed(DecodeError::NoCode))
        );
    }

    #[test]
    fn test_backspace_edits_preview() {
        let mut decoder = KeypadDecoder::new();
        type_text(&mut decoder, "ABC");
        decoder.feed(Input::Backspace);
        assert_eq!(decoder.preview(), "AB");

        decoder.feed(Input::Backspace);
        decoder.feed(Input::Backspace);
        decoder.feed(Input::Backspace);
        assert_eq!(decoder.preview(), "");
    }

    #[test]
    fn test_overflow_resets_buffer() {
        let mut decoder = KeypadDecoder::new();
        type_text(&mut decoder, &"x".repeat(MAX_PAYLOAD_LEN));

        assert_eq!(
            decoder.feed(Input::Char('x')),
            Some(DecodeEvent::Failed(DecodeError::Overflow {
                max: MAX_PAYLOAD_LEN
            }))
        );
        assert_eq!(decoder.preview(), "");
    }
}
