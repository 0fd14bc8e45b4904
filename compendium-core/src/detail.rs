//! Single-record detail loading.

use std::sync::{Arc, RwLock};

use compendium_model::Record;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, warn};

use crate::api::source::RecordSource;
use crate::list::controller::LoadOutcome;
use crate::requests::{RequestTicket, RequestTracker, run_cancellable};
use crate::routes::parse_record_id;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<R> {
    Loading,
    Loaded(R),
    NotFound,
    Failed(String),
}

impl<R> DetailState<R> {
    pub fn record(&self) -> Option<&R> {
        match self {
            DetailState::Loaded(record) => Some(record),
            _ => None,
        }
    }
}

pub struct DetailController<R> {
    source: Arc<dyn RecordSource<R>>,
    state: RwLock<DetailState<R>>,
    requests: RequestTracker,
    _shutdown: DropGuard,
}

impl<R: Record + std::fmt::Debug> std::fmt::Debug for DetailController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<R: Record> DetailController<R> {
    pub fn new(source: Arc<dyn RecordSource<R>>) -> Self {
        let root = CancellationToken::new();
        Self {
            source,
            state: RwLock::new(DetailState::Loading),
            requests: RequestTracker::new(root.clone()),
            _shutdown: root.drop_guard(),
        }
    }

    pub fn state(&self) -> DetailState<R> {
        self.state
            .read()
            .map(|state| state.clone())
            .unwrap_or(DetailState::Loading)
    }

    /// Load the record named by a raw route segment. Malformed ids resolve
    /// to not-found without touching the source.
    pub async fn load_segment(&self, segment: &str) -> LoadOutcome {
        match parse_record_id(segment) {
            Ok(id) => self.load(id).await,
            Err(err) => {
                debug!(kind = %R::KIND, error = %err, "invalid detail route");
                if let Ok(mut state) = self.state.write() {
                    self.requests.cancel_active();
                    *state = DetailState::NotFound;
                }
                LoadOutcome::Committed
            }
        }
    }

    pub async fn load(&self, id: u32) -> LoadOutcome {
        let ticket = self.begin();

        let Some(result) = run_cancellable(&ticket, self.source.fetch_one(id)).await
        else {
            return LoadOutcome::Cancelled;
        };

        let next = match result {
            Ok(record) => DetailState::Loaded(record),
            Err(err) if err.is_not_found() => DetailState::NotFound,
            Err(err) => {
                warn!(kind = %R::KIND, id, error = %err, "detail load failed");
                DetailState::Failed(err.to_string())
            }
        };

        // Checked under the lock so a newer `load` cannot start in between.
        let Ok(mut state) = self.state.write() else {
            return LoadOutcome::Superseded;
        };
        if !self.requests.is_current(ticket.generation) {
            debug!(kind = %R::KIND, id, "discarding stale detail response");
            return LoadOutcome::Superseded;
        }
        *state = next;
        LoadOutcome::Committed
    }

    /// Start an attempt and show `Loading` under one state lock.
    fn begin(&self) -> RequestTicket {
        match self.state.write() {
            Ok(mut state) => {
                let ticket = self.requests.begin();
                *state = DetailState::Loading;
                ticket
            }
            Err(_) => self.requests.begin(),
        }
    }
}
