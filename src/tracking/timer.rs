//! Visual confirmation timer
//!
//! A cancellable delayed task that posts [`Action::ConfirmationElapsed`] back to
//! the event loop once the confirmation window has run out.

use super::transitions::Action;
use log::debug;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct ConfirmationTimer {
    window: Duration,
    sender: mpsc::Sender<Action>,
    pending: Option<(CancellationToken, JoinHandle<()>)>,
}

impl ConfirmationTimer {
    pub fn new(window: Duration, sender: mpsc::Sender<Action>) -> Self {
        Self {
            window,
            sender,
            pending: None,
        }
    }

    /// Starts a new window for `epoch`, cancelling the one in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, epoch: u64) {
        self.cancel();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let sender = self.sender.clone();
        let window = self.window;

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    debug!("Confirmation window {} cancelled", epoch);
                }
                _ = tokio::time::sleep(window) => {
                    let _ = sender.send(Action::ConfirmationElapsed { epoch }).await;
                }
            }
        });
        self.pending = Some((token, handle));
    }

    /// Cancels the pending window, if any.
    pub fn cancel(&mut self) {
        if let Some((token, _)) = self.pending.take() {
            token.cancel();
        }
    }

    /// Whether a window is still counting down.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|(token, handle)| !token.is_cancelled() && !handle.is_finished())
    }
}

impl Drop for ConfirmationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_window() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = ConfirmationTimer::new(Duration::from_millis(3000), tx);

        timer.start(1);
        assert!(timer.is_pending());

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(
            rx.recv().await,
            Some(Action::ConfirmationElapsed { epoch: 1 })
        );
    }

    #[tokio::test(start_paused = true)]
    // Restarting replaces the earlier window instead of stacking a second one.
    async fn test_restart_cancels_previous_window() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = ConfirmationTimer::new(Duration::from_millis(3000), tx);

        timer.start(1);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        timer.start(2);

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(
            rx.recv().await,
            Some(Action::ConfirmationElapsed { epoch: 2 })
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_and_drop_stop_delivery() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = ConfirmationTimer::new(Duration::from_millis(3000), tx.clone());
        timer.start(1);
        timer.cancel();
        assert!(!timer.is_pending());

        let mut dropped = ConfirmationTimer::new(Duration::from_millis(3000), tx);
        dropped.start(2);
        drop(dropped);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }
}
