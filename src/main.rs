mod cli_messages;
mod config;
mod consts;
mod events;
mod logging;
mod scanner;
mod session;
mod tracking;
mod ui;

use crate::config::{Config, get_config_path};
use crate::logging::{LogSink, get_log_path};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// SecureTrack container tracking dashboard
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the tracking dashboard
    Start {
        /// Read commands from stdin instead of running the terminal UI
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Seed for the alert simulation, for reproducible runs
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Location to report for this run, overriding the configuration file
        #[arg(long, value_name = "LOCATION")]
        location: Option<String>,

        /// Paint the dashboard background
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Store the container location in the configuration file
    SetLocation {
        /// Display name of the location, e.g. "Port of Rotterdam"
        #[arg(value_name = "LOCATION")]
        location: String,
    },
    /// Delete the configuration file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            seed,
            location,
            with_background,
        } => {
            // The TUI owns the terminal, so its records go to a file
            let sink = if headless {
                LogSink::Stderr
            } else {
                LogSink::File(get_log_path()?)
            };
            logging::init_logger(&sink)?;

            let config = Config::load_or_default(&config_path).map_err(|e| {
                format!(
                    "Failed to load config {}: {}",
                    config_path.display(),
                    e
                )
            })?;
            let session = setup_session(&config, location, seed);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background || config.with_background_color).await
            }
        }
        Command::SetLocation { location } => {
            logging::init_logger(&LogSink::Stderr)?;
            let location = location.trim().to_string();
            if location.is_empty() {
                print_cmd_error!("Location must not be empty");
                return Err(Box::from("Location must not be empty"));
            }
            let mut config = Config::load_or_default(&config_path)?;
            config.location = location;
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Location saved", "{}", config.location);
            Ok(())
        }
        Command::Reset => {
            logging::init_logger(&LogSink::Stderr)?;
            print_cmd_info!("Resetting", "clearing configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
