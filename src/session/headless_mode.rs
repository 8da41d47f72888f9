//! Headless mode execution

use super::{
    SessionData,
    commands::HeadlessCommand,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::Event;
use crate::scanner::{DecodeError, DecodeEvent, ScanDialog};
use crate::tracking::{Action, Tracker};
use crate::{print_cmd_info, print_cmd_warn};
use std::error::Error;
use std::io::Write;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Command interpreter over a tracker, writing activity and status to `out`.
pub struct HeadlessSession<W: Write> {
    tracker: Tracker,
    scan_dialog: Option<ScanDialog>,
    out: W,
}

impl<W: Write> HeadlessSession<W> {
    pub fn new(tracker: Tracker, out: W) -> Self {
        Self {
            tracker,
            scan_dialog: None,
            out,
        }
    }

    /// Applies one action and prints the resulting activity line.
    pub fn dispatch(&mut self, action: Action) -> std::io::Result<()> {
        let result = self.tracker.dispatch(action.clone());
        let event = Event::from_dispatch(&action, &result, self.tracker.state());
        if event.should_display() {
            writeln!(self.out, "{}", event)?;
        }
        ScanDialog::reconcile(&mut self.scan_dialog, self.tracker.state().is_scanning);
        Ok(())
    }

    /// Runs a command that needs no waiting.
    ///
    /// `Wait` is handled by the caller since it has to keep draining timer actions.
    pub fn execute(&mut self, command: HeadlessCommand) -> std::io::Result<ControlFlow<()>> {
        match command {
            HeadlessCommand::Open => self.dispatch(Action::OpenScanner)?,
            HeadlessCommand::Close => match &self.scan_dialog {
                Some(dialog) => {
                    let action = dialog.close();
                    self.dispatch(action)?;
                }
                None => self.dispatch(Action::CloseScanner)?,
            },
            HeadlessCommand::Decode(payload) => self.decode(DecodeEvent::Decoded(payload))?,
            HeadlessCommand::DecodeError(message) => {
                self.decode(DecodeEvent::Failed(DecodeError::Device(message)))?
            }
            HeadlessCommand::Scan(payload) => {
                if self.scan_dialog.is_none() {
                    self.dispatch(Action::OpenScanner)?;
                }
                self.decode(DecodeEvent::Decoded(payload))?;
            }
            HeadlessCommand::Alert => self.dispatch(Action::SimulateAlert)?,
            HeadlessCommand::Dismiss => self.dispatch(Action::DismissNotifications)?,
            HeadlessCommand::Status => self.print_status()?,
            HeadlessCommand::Wait(_) => {}
            HeadlessCommand::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn decode(&mut self, event: DecodeEvent) -> std::io::Result<()> {
        let Some(dialog) = &self.scan_dialog else {
            writeln!(self.out, "Scanner is not open; ignoring decode")?;
            return Ok(());
        };
        match dialog.on_decode_event(event) {
            Some(action) => self.dispatch(action),
            None => Ok(()),
        }
    }

    /// Prints every field of the tracking state, one `key: value` per line.
    pub fn print_status(&mut self) -> std::io::Result<()> {
        let state = self.tracker.state();
        writeln!(self.out, "temperature: {:.1}", state.temperature)?;
        writeln!(self.out, "location: {}", state.location)?;
        writeln!(self.out, "secure: {}", state.is_secure)?;
        writeln!(
            self.out,
            "visual_confirmation: {}",
            state.show_visual_confirmation
        )?;
        writeln!(self.out, "scanning: {}", state.is_scanning)?;
        writeln!(self.out, "notifications: {}", state.notifications.len())?;
        for notification in &state.notifications {
            writeln!(self.out, "  - {}", notification)?;
        }
        writeln!(self.out, "events: {}", state.events.len())?;
        for entry in &state.events {
            writeln!(
                self.out,
                "  - {} | {} | {}",
                entry.timestamp, entry.event, entry.location
            )?;
        }
        Ok(())
    }

    /// Keeps applying timer actions until `duration` has passed.
    pub async fn wait(
        &mut self,
        duration: Duration,
        timer_receiver: &mut mpsc::Receiver<Action>,
    ) -> std::io::Result<()> {
        let deadline = tokio::time::sleep(duration);
        tokio::pin!(deadline);
        loop {
            tokio::select! {
                _ = &mut deadline => return Ok(()),
                Some(action) = timer_receiver.recv() => self.dispatch(action)?,
            }
        }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Reading commands from stdin until `quit` or end of input
/// 2. Applying confirmation timer actions as they arrive
/// 3. Printing activity for every dispatched action
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.location);

    let SessionData {
        tracker,
        mut timer_receiver,
        ..
    } = session;
    let mut headless = HeadlessSession::new(tracker, std::io::stdout());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some(action) = timer_receiver.recv() => headless.dispatch(action)?,
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<HeadlessCommand>() {
                    Ok(HeadlessCommand::Wait(duration)) => {
                        headless.wait(duration, &mut timer_receiver).await?;
                    }
                    Ok(command) => {
                        if headless.execute(command)?.is_break() {
                            break;
                        }
                    }
                    Err(e) => print_cmd_warn!("Invalid command", "{}", e),
                }
            }
        }
    }

    print_session_shutdown();
    if headless.tracker().confirmation_pending() {
        print_cmd_info!("Confirmation", "cancelling pending confirmation window");
    }
    drop(headless);
    print_session_exit_success();

    Ok(())
}
