//! Console output for SecureTrack commands
//!
//! `set-location`, `reset` and headless sessions report progress as tagged
//! lines on the terminal, e.g. `[SUCCESS] Location saved	 Port of Rotterdam`.
//! Errors go to stderr so headless transcripts on stdout stay parseable.

const RESET: &str = "\x1b[0m";

/// Severity tag printed in front of a console line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tag {
    Info,
    Warn,
    Error,
    Success,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Tag::Info => "[INFO]",
            Tag::Warn => "[WARN]",
            Tag::Error => "[ERROR]",
            Tag::Success => "[SUCCESS]",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Tag::Info => "\x1b[1;36m",
            Tag::Warn => "\x1b[1;33m",
            Tag::Error => "\x1b[1;31m",
            Tag::Success => "\x1b[1;32m",
        }
    }
}

/// Renders one tagged line. Details, when present, follow the title after a tab.
pub fn format_line(tag: Tag, title: &str, details: &str) -> String {
    let mut line = format!("{}{}{} {}", tag.color(), tag.label(), RESET, title);
    if !details.is_empty() {
        line.push_str("\t ");
        line.push_str(details);
    }
    line
}

/// Progress of a command, e.g. the config file being cleared.
pub fn print_info(title: &str, details: &str) {
    println!("{}", format_line(Tag::Info, title, details));
}

/// Recoverable problems, such as a headless line that is not a command.
pub fn print_warn(title: &str, details: &str) {
    println!("{}", format_line(Tag::Warn, title, details));
}

/// A command that cannot go on.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}", format_line(Tag::Error, title, details.unwrap_or_default()));
}

/// A command that finished, e.g. a stored location.
pub fn print_success(title: &str, details: &str) {
    println!("{}", format_line(Tag::Success, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
