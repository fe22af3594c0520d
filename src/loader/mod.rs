//! Simulated async data loading.
//!
//! A [`Loader`] stands in for a network fetch: it holds the payload it will
//! "fetch", waits a fixed delay on a tokio timer and then hands the payload
//! back through the application's message channel.
//!
//! ## Lifecycle
//!
//! 1. [`Loader::new`] - state is [`LoadState::Loading`], nothing scheduled
//! 2. [`Loader::start`] - spawns one timer task, returns immediately
//! 3. The task sends `wrap(ticket, payload)` on the channel after the delay
//! 4. The owner calls [`Loader::complete`] with that message's contents and
//!    the state becomes [`LoadState::Ready`] for good
//!
//! Dropping a loader cancels its task. A cancelled task exits without
//! sending, and a completion carrying a foreign [`LoadTicket`] is rejected,
//! so a torn-down view can never receive a late update.

mod fetch;
mod state;
mod ticket;

pub use fetch::simulate_fetch;
pub use state::{LoadState, LoaderView};
pub use ticket::LoadTicket;

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Default simulated latency
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// A one-shot simulated fetch.
pub struct Loader<T> {
    ticket: LoadTicket,
    delay: Duration,
    /// Payload waiting for `start`; `None` once the timer task owns it
    pending: Option<T>,
    state: LoadState<T>,
    cancel: CancellationToken,
}

impl<T> Loader<T> {
    /// Create a loader that will resolve to `payload` after `delay`.
    pub fn new(payload: T, delay: Duration) -> Self {
        Self {
            ticket: LoadTicket::next(),
            delay,
            pending: Some(payload),
            state: LoadState::Loading,
            cancel: CancellationToken::new(),
        }
    }

    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn result(&self) -> Option<&T> {
        self.state.result()
    }

    /// Whether the timer task has been spawned
    pub fn is_started(&self) -> bool {
        self.pending.is_none()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Current `{loading, result}` pair
    pub fn view(&self) -> LoaderView<'_, T> {
        LoaderView::from(&self.state)
    }

    /// Hand the current `{loading, result}` pair to a rendering callback.
    pub fn render<R>(&self, f: impl FnOnce(LoaderView<'_, T>) -> R) -> R {
        f(self.view())
    }

    /// Apply a completion delivered through the message channel.
    ///
    /// Returns `true` if the state changed. Completions for another ticket,
    /// for a cancelled loader, or for a loader that already finished are
    /// ignored.
    pub fn complete(&mut self, ticket: LoadTicket, payload: T) -> bool {
        if ticket != self.ticket {
            warn!(expected = %self.ticket, got = %ticket, "discarding completion for another loader");
            return false;
        }
        if self.is_cancelled() {
            debug!(%ticket, "discarding completion for cancelled loader");
            return false;
        }
        if !self.state.is_loading() {
            debug!(%ticket, "loader already completed");
            return false;
        }

        self.state = LoadState::Ready(payload);
        debug!(%ticket, "loader ready");
        true
    }

    /// Stop the timer task. The loader stays in its current state.
    pub fn cancel(&self) {
        if !self.cancel.is_cancelled() {
            debug!(ticket = %self.ticket, "loader cancelled");
        }
        self.cancel.cancel();
    }
}

impl<T: Send + 'static> Loader<T> {
    /// Spawn the timer task.
    ///
    /// When the delay elapses the task sends `wrap(ticket, payload)` on `tx`.
    /// Must be called from within a tokio runtime. Calling `start` a second
    /// time is a no-op.
    pub fn start<M, F>(&mut self, tx: UnboundedSender<M>, wrap: F)
    where
        M: Send + 'static,
        F: FnOnce(LoadTicket, T) -> M + Send + 'static,
    {
        let Some(payload) = self.pending.take() else {
            warn!(ticket = %self.ticket, "loader already started");
            return;
        };

        let ticket = self.ticket;
        let delay = self.delay;
        let cancel = self.cancel.clone();
        debug!(%ticket, delay_ms = delay.as_millis() as u64, "loader started");

        tokio::spawn(async move {
            match simulate_fetch(payload, delay, cancel).await {
                Some(payload) => {
                    if tx.send(wrap(ticket, payload)).is_err() {
                        debug!(%ticket, "receiver gone, completion dropped");
                    }
                }
                None => debug!(%ticket, "timer task exited on cancel"),
            }
        });
    }
}

impl<T> Drop for Loader<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl<T> std::fmt::Debug for Loader<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("ticket", &self.ticket)
            .field("delay", &self.delay)
            .field("started", &self.is_started())
            .field("loading", &self.is_loading())
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
