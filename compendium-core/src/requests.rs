//! Last-request-wins bookkeeping shared by list and detail loads.
//!
//! Every attempt takes a generation number and a child of the owner's root
//! [`CancellationToken`]. Starting a new attempt cancels the previous token,
//! and a completion may only commit while its generation is still current.
//! Cancelling the root (the owner going away) cancels everything in flight.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RequestTicket {
    pub generation: u64,
    pub token: CancellationToken,
}

#[derive(Debug)]
pub struct RequestTracker {
    root: CancellationToken,
    active_generation: AtomicU64,
    active_token: Mutex<Option<CancellationToken>>,
}

impl RequestTracker {
    pub fn new(root: CancellationToken) -> Self {
        Self {
            root,
            active_generation: AtomicU64::new(0),
            active_token: Mutex::new(None),
        }
    }

    /// Start a new attempt, superseding the current one.
    pub fn begin(&self) -> RequestTicket {
        let generation = self.active_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let token = self.root.child_token();
        if let Ok(mut guard) = self.active_token.lock()
            && let Some(previous) = guard.replace(token.clone())
        {
            debug!(generation, "superseding in-flight request");
            previous.cancel();
        }
        RequestTicket { generation, token }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.active_generation.load(Ordering::SeqCst) == generation
    }

    pub fn current_generation(&self) -> u64 {
        self.active_generation.load(Ordering::SeqCst)
    }

    /// Cancel the active attempt without starting a new one.
    pub fn cancel_active(&self) {
        self.active_generation.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.active_token.lock()
            && let Some(active) = guard.take()
        {
            active.cancel();
        }
    }
}

/// Drive `work` unless the ticket is cancelled first. `None` means the
/// attempt was cancelled and must leave no trace.
pub async fn run_cancellable<F, T>(ticket: &RequestTicket, work: F) -> Option<T>
where
    F: Future<Output = T>,
{
    tokio::select! {
        biased;
        _ = ticket.token.cancelled() => None,
        output = work => Some(output),
    }
}
