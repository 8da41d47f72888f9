//! Headless command parsing
//!
//! One command per input line; the first word selects the command and the
//! rest of the line is its argument.

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessCommand {
    /// Mount the scan dialog.
    Open,
    /// The decoder read `payload`.
    Decode(String),
    /// The decoder failed with `message`.
    DecodeError(String),
    /// Open the dialog and decode `payload` in one step.
    Scan(String),
    /// Close the dialog.
    Close,
    /// Simulate an alert.
    Alert,
    /// Dismiss all notifications.
    Dismiss,
    /// Print the full tracking state.
    Status,
    /// Keep processing timer events for a while.
    Wait(Duration),
    /// Stop the session.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid duration `{0}`")]
    InvalidDuration(String),
}

impl FromStr for HeadlessCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_end()),
            None => (line.trim_end(), ""),
        };

        match word.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "open" => Ok(Self::Open),
            "decode" => Ok(Self::Decode(rest.to_string())),
            "decode-error" => {
                if rest.is_empty() {
                    Err(CommandError::MissingArgument {
                        command: "decode-error",
                        expected: "a message",
                    })
                } else {
                    Ok(Self::DecodeError(rest.to_string()))
                }
            }
            "scan" => Ok(Self::Scan(rest.to_string())),
            "close" => Ok(Self::Close),
            "alert" => Ok(Self::Alert),
            "dismiss" => Ok(Self::Dismiss),
            "status" => Ok(Self::Status),
            "wait" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "wait",
                        expected: "a number of seconds",
                    });
                }
                let secs: f64 = rest
                    .parse()
                    .map_err(|_| CommandError::InvalidDuration(rest.to_string()))?;
                Duration::try_from_secs_f64(secs)
                    .map(Self::Wait)
                    .map_err(|_| CommandError::InvalidDuration(rest.to_string()))
            }
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("open".parse(), Ok(HeadlessCommand::Open));
        assert_eq!("  ALERT ".parse(), Ok(HeadlessCommand::Alert));
        assert_eq!("dismiss".parse(), Ok(HeadlessCommand::Dismiss));
        assert_eq!("exit".parse(), Ok(HeadlessCommand::Quit));
    }

    #[test]
    // Payload keeps inner spacing; a bare `scan` decodes an empty payload.
    fn test_parse_payload_commands() {
        assert_eq!(
            "decode MSCU 1234567".parse(),
            Ok(HeadlessCommand::Decode("MSCU 1234567".to_string()))
        );
        assert_eq!("scan".parse(), Ok(HeadlessCommand::Scan(String::new())));
        assert_eq!(
            "decode-error lens covered".parse(),
            Ok(HeadlessCommand::DecodeError("lens covered".to_string()))
        );
    }

    #[test]
    fn test_parse_wait() {
        assert_eq!(
            "wait 3.5".parse(),
            Ok(HeadlessCommand::Wait(Duration::from_millis(3500)))
        );
        assert_eq!(
            "wait soon".parse::<HeadlessCommand>(),
            Err(CommandError::InvalidDuration("soon".to_string()))
        );
        assert_eq!(
            "wait -1".parse::<HeadlessCommand>(),
            Err(CommandError::InvalidDuration("-1".to_string()))
        );
        assert!(matches!(
            "wait".parse::<HeadlessCommand>(),
            Err(CommandError::MissingArgument { command: "wait", .. })
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<HeadlessCommand>(), Err(CommandError::Empty));
        assert_eq!(
            "teleport".parse::<HeadlessCommand>(),
            Err(CommandError::Unknown("teleport".to_string()))
        );
        assert!("decode-error".parse::<HeadlessCommand>().is_err());
    }
}
