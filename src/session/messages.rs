//! Session lifecycle messages
//!
//! Printed before the TUI takes the terminal and after it gives it back, and
//! around a headless transcript.

use crate::cli_messages::{Tag, format_line};

/// Starting line, naming the mode and where the container is reported.
pub fn session_starting_line(mode: &str, location: &str) -> String {
    format_line(
        Tag::Info,
        &format!("Starting {} session", mode),
        &format!("tracking container at {}", location),
    )
}

pub fn print_session_starting(mode: &str, location: &str) {
    println!("{}", session_starting_line(mode, location));
}

pub fn print_session_shutdown() {
    println!("{}", format_line(Tag::Info, "Shutting down...", ""));
}

pub fn print_session_exit_success() {
    println!(
        "{}",
        format_line(Tag::Success, "SecureTrack exited successfully", "")
    );
}
