//! Remote list loading with last-request-wins semantics.

use std::sync::{Arc, RwLock};

use compendium_model::Record;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, warn};

use crate::api::source::RecordSource;
use crate::query::params::FilterState;
use crate::query::types::{DEFAULT_PAGE_LIMIT, PageQuery};
use crate::requests::{RequestTicket, RequestTracker, run_cancellable};

/// What the page renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    pub records: Vec<R>,
    pub total: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            loading: false,
            error: None,
        }
    }
}

/// How a load attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records or an error were stored.
    Committed,
    /// A newer attempt started first; nothing was stored.
    Superseded,
    /// Cancelled before completion; nothing was stored.
    Cancelled,
}

struct Shared<R> {
    source: Arc<dyn RecordSource<R>>,
    state: RwLock<ListState<R>>,
    requests: RequestTracker,
    limit: usize,
}

/// Cloneable access to a controller's state for background tasks.
///
/// Handles do not keep requests alive: once the owning [`ListController`]
/// is dropped every load started through a handle resolves as cancelled.
pub struct ListHandle<R> {
    shared: Arc<Shared<R>>,
}

impl<R> Clone for ListHandle<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R> std::fmt::Debug for ListHandle<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListHandle")
            .field("generation", &self.shared.requests.current_generation())
            .finish_non_exhaustive()
    }
}

pub struct ListController<R> {
    handle: ListHandle<R>,
    _shutdown: DropGuard,
}

impl<R> std::fmt::Debug for ListController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListController")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl<R: Record> ListController<R> {
    pub fn new(source: Arc<dyn RecordSource<R>>) -> Self {
        Self::with_limit(source, DEFAULT_PAGE_LIMIT)
    }

    pub fn with_limit(source: Arc<dyn RecordSource<R>>, limit: usize) -> Self {
        let root = CancellationToken::new();
        let shared = Shared {
            source,
            state: RwLock::new(ListState::default()),
            requests: RequestTracker::new(root.clone()),
            limit,
        };
        Self {
            handle: ListHandle {
                shared: Arc::new(shared),
            },
            _shutdown: root.drop_guard(),
        }
    }

    pub fn handle(&self) -> ListHandle<R> {
        self.handle.clone()
    }

    pub fn state(&self) -> ListState<R> {
        self.handle.state()
    }

    pub async fn load(&self, filters: &FilterState) -> LoadOutcome {
        self.handle.load(filters).await
    }

    pub fn spawn_load(&self, filters: FilterState) -> JoinHandle<LoadOutcome> {
        self.handle.spawn_load(filters)
    }
}

impl<R: Record> ListHandle<R> {
    pub fn state(&self) -> ListState<R> {
        self.shared
            .state
            .read()
            .map(|state| state.clone())
            .unwrap_or_default()
    }

    pub fn limit(&self) -> usize {
        self.shared.limit
    }

    /// Fetch the first page for `filters` and store the result if this is
    /// still the newest attempt when it completes.
    pub async fn load(&self, filters: &FilterState) -> LoadOutcome {
        let ticket = self.begin();
        self.shared.run(ticket, filters.clone()).await
    }

    /// Like [`ListHandle::load`], on a new task. The attempt is registered
    /// before this returns, so call order decides which attempt is newest.
    pub fn spawn_load(&self, filters: FilterState) -> JoinHandle<LoadOutcome> {
        let ticket = self.begin();
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move { shared.run(ticket, filters).await })
    }

    /// The generation bump and the loading flag change together under the
    /// state lock, so a completing attempt sees either both or neither.
    fn begin(&self) -> RequestTicket {
        match self.shared.state.write() {
            Ok(mut state) => {
                let ticket = self.shared.requests.begin();
                state.loading = true;
                state.error = None;
                ticket
            }
            Err(_) => self.shared.requests.begin(),
        }
    }
}

impl<R: Record> Shared<R> {
    async fn run(&self, ticket: RequestTicket, filters: FilterState) -> LoadOutcome {
        let query = PageQuery::from_filters::<R>(&filters, self.limit);
        debug!(kind = %R::KIND, generation = ticket.generation, ?query, "loading list");

        let Some(result) =
            run_cancellable(&ticket, self.source.fetch_page(&query)).await
        else {
            debug!(generation = ticket.generation, "list load cancelled");
            return LoadOutcome::Cancelled;
        };

        let Ok(mut state) = self.state.write() else {
            warn!("list state lock poisoned; dropping response");
            return LoadOutcome::Superseded;
        };
        if !self.requests.is_current(ticket.generation) {
            debug!(generation = ticket.generation, "discarding stale list response");
            return LoadOutcome::Superseded;
        }
        match result {
            Ok(page) => {
                debug!(
                    generation = ticket.generation,
                    count = page.records.len(),
                    total = page.total,
                    "list loaded"
                );
                state.records = page.records;
                state.total = page.total;
                state.error = None;
            }
            Err(err) => {
                warn!(kind = %R::KIND, error = %err, "list load failed");
                state.records = Vec::new();
                state.total = 0;
                state.error = Some(err.to_string());
            }
        }
        state.loading = false;
        LoadOutcome::Committed
    }
}
