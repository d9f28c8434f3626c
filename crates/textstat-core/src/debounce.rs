//! Debounced recomputation.
//!
//! Rapid consecutive edits should coalesce into one analysis pass:
//! schedule on edit, cancel the previous schedule on a newer edit, run
//! once the input has been quiet for the delay window. Only the most
//! recent input is ever analyzed, so a newer edit can never lose to a
//! stale result.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default quiet window before a recomputation fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

enum Msg {
    Input(String),
    Shutdown,
}

/// A cancellable delayed-task runner.
///
/// Owns a worker thread. [`trigger`](Self::trigger) hands it a new
/// input and restarts the delay; when no newer input arrives within
/// the window, the callback runs with the latest input. Dropping the
/// debouncer stops the worker; a pending input that has not settled
/// yet is discarded.
pub struct Debouncer {
    tx: Sender<Msg>,
    worker: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Spawn a debouncer that calls `on_settle` with the latest input
    /// once edits pause for `delay`.
    pub fn new<F>(delay: Duration, mut on_settle: F) -> Self
    where
        F: FnMut(String) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let worker = thread::spawn(move || {
            loop {
                // Block until the first edit of a burst
                let mut pending = match rx.recv() {
                    Ok(Msg::Input(input)) => input,
                    Ok(Msg::Shutdown) | Err(_) => return,
                };

                // Each newer edit restarts the window and supersedes
                // the pending input
                loop {
                    match rx.recv_timeout(delay) {
                        Ok(Msg::Input(input)) => pending = input,
                        Ok(Msg::Shutdown) => return,
                        Err(RecvTimeoutError::Timeout) => break,
                        Err(RecvTimeoutError::Disconnected) => return,
                    }
                }

                on_settle(pending);
            }
        });

        Self {
            tx,
            worker: Some(worker),
        }
    }

    /// Schedule a recomputation for `input`, superseding any pending one.
    pub fn trigger(&self, input: String) {
        // Worker only exits on shutdown, so a send failure here means
        // we are already tearing down
        let _ = self.tx.send(Msg::Input(input));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        let _ = self.tx.send(Msg::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
