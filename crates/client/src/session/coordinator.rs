//! Renewal coordinator
//!
//! Single-flight guarantee for session renewal: however many requests fail
//! with an expired session concurrently, exactly one renewal call goes out.
//! The first failure to arrive becomes the driver; everyone after it parks
//! in a FIFO queue of oneshot waiters until the driver settles the epoch.
//!
//! The `renewing` flag is flipped inside the state lock, before the driver
//! reaches any await point. A second failure observing the coordinator
//! between that flip and the renewal call's completion is queued, never
//! driven; that window is exactly the race the flag exists to close.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};
use zapwallet_domain::WalletError;

/// Result of one renewal epoch, fanned out to every queued caller
pub type RenewalOutcome = Result<(), WalletError>;

/// Collaborator notified when a renewal epoch fails terminally
///
/// Invoked exactly once per failed epoch, after every queued caller has been
/// rejected. The dashboard shell installs a hook that routes the user back
/// to the login flow; the default just logs.
#[async_trait]
pub trait SessionLostHook: Send + Sync {
    async fn session_lost(&self, error: &WalletError);
}

/// Default hook: record the terminal failure and nothing else.
pub struct LogSessionLost;

#[async_trait]
impl SessionLostHook for LogSessionLost {
    async fn session_lost(&self, error: &WalletError) {
        warn!(%error, "session lost; re-authentication required");
    }
}

/// Role handed to a caller entering the coordinator
#[derive(Debug)]
pub enum RenewalTicket {
    /// Caller owns the epoch: it must invoke the renewal endpoint once and
    /// then [`RenewalCoordinator::settle`] with the result.
    Driver,
    /// Caller is queued behind an in-flight renewal; await the receiver for
    /// the epoch's outcome.
    Waiter(oneshot::Receiver<RenewalOutcome>),
}

#[derive(Default)]
struct RenewalState {
    renewing: bool,
    waiters: Vec<oneshot::Sender<RenewalOutcome>>,
}

/// Process-wide renewal state: the `renewing` flag plus the waiter queue
///
/// One instance exists per client, owned and threaded explicitly rather
/// than living in a global. Critical sections never span an await, so a
/// plain std mutex is enough even on a multi-threaded runtime.
pub struct RenewalCoordinator {
    state: Mutex<RenewalState>,
    session_lost: Arc<dyn SessionLostHook>,
}

impl RenewalCoordinator {
    #[must_use]
    pub fn new(session_lost: Arc<dyn SessionLostHook>) -> Self {
        Self { state: Mutex::new(RenewalState::default()), session_lost }
    }

    /// Enter the coordinator after an expired-session failure.
    ///
    /// The first caller of an epoch becomes the [`RenewalTicket::Driver`];
    /// every later caller gets a queued [`RenewalTicket::Waiter`]. Queue
    /// order is arrival order.
    pub fn join(&self) -> RenewalTicket {
        let mut state = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        if state.renewing {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            debug!(queued = state.waiters.len(), "renewal in flight; queueing request");
            return RenewalTicket::Waiter(rx);
        }

        state.renewing = true;
        debug!("claiming renewal driver role");
        RenewalTicket::Driver
    }

    /// Close the epoch and release every waiter in FIFO order.
    ///
    /// Each waiter is settled exactly once; a waiter whose caller has gone
    /// away (dropped receiver) is skipped without wedging the drain. On a
    /// failed outcome the session-lost hook fires once, after the queue has
    /// been rejected.
    pub async fn settle(&self, outcome: RenewalOutcome) {
        let waiters = {
            let mut state = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            state.renewing = false;
            std::mem::take(&mut state.waiters)
        };

        let released = waiters.len();
        for waiter in waiters {
            let _ = waiter.send(outcome.clone());
        }

        match &outcome {
            Ok(()) => info!(released, "session renewed; releasing queued requests"),
            Err(error) => {
                warn!(released, %error, "session renewal failed; rejecting queued requests");
                self.session_lost.session_lost(error).await;
            }
        }
    }

    #[cfg(test)]
    fn is_renewing(&self) -> bool {
        self.state.lock().unwrap().renewing
    }
}
