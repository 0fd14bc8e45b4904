//! One list page: URL filters, remote records, sorting and preferences
//! composed into a render model.

use std::collections::BTreeMap;
use std::sync::Arc;

use compendium_model::{
    CardDensity, ListViewMode, Record, RecordKind, record::SEARCH_PARAM,
};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::source::{MetadataSource, RecordSource};
use crate::error::Result;
use crate::list::controller::{ListController, ListState, LoadOutcome};
use crate::list::present::ListPresentation;
use crate::preferences::Preferences;
use crate::query::filtering::RecordFilter;
use crate::query::options::{FilterOption, resolve_options};
use crate::query::params::QueryParamSync;
use crate::query::sorting::{
    Column, SortController, SortIndicator, SortOwnership, SortState, sort_rows,
};
use crate::query::types::DEFAULT_PAGE_LIMIT;

/// Skeleton cards shown while a load is outstanding.
pub const LOADING_PLACEHOLDERS: usize = 6;
pub const EMPTY_MESSAGE: &str = "No results found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub badge: String,
    pub description: Option<String>,
    pub stats: Vec<(String, String)>,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub indicator: SortIndicator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: u32,
    pub href: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    Loading { placeholders: usize },
    Empty { message: String },
    Cards(Vec<CardView>),
    Table(TableView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectFilterView {
    pub key: String,
    pub label: String,
    pub value: String,
    pub all_label: String,
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub kind: RecordKind,
    pub error: Option<String>,
    pub search_value: String,
    pub search_placeholder: String,
    pub filters: Vec<SelectFilterView>,
    pub summary: String,
    pub view_mode: ListViewMode,
    pub density: CardDensity,
    pub body: PageBody,
}

pub struct ListPage<R: ListPresentation> {
    params: QueryParamSync,
    controller: ListController<R>,
    sort: SortController,
    columns: Vec<Column<R>>,
    preferences: Preferences,
    view_mode: ListViewMode,
    density: CardDensity,
    metadata: BTreeMap<&'static str, Vec<String>>,
    driver: Option<JoinHandle<()>>,
}

impl<R: ListPresentation> std::fmt::Debug for ListPage<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListPage")
            .field("kind", &R::KIND)
            .field("location", &self.params.location().as_str())
            .field("sort", &self.sort)
            .field("view_mode", &self.view_mode)
            .field("density", &self.density)
            .finish_non_exhaustive()
    }
}

impl<R: ListPresentation> ListPage<R> {
    /// Preferences are read once here; later changes go through the
    /// setters, which persist them.
    pub fn new(
        params: QueryParamSync,
        source: Arc<dyn RecordSource<R>>,
        preferences: Preferences,
    ) -> Self {
        Self::with_limit(params, source, preferences, DEFAULT_PAGE_LIMIT)
    }

    pub fn with_limit(
        params: QueryParamSync,
        source: Arc<dyn RecordSource<R>>,
        preferences: Preferences,
        limit: usize,
    ) -> Self {
        let view_mode = preferences.list_view();
        let density = preferences.card_density();
        Self {
            params,
            controller: ListController::with_limit(source, limit),
            sort: SortController::default(),
            columns: R::columns(),
            preferences,
            view_mode,
            density,
            metadata: BTreeMap::new(),
            driver: None,
        }
    }

    /// Replace the default internally owned sort.
    pub fn with_sort(mut self, ownership: SortOwnership) -> Self {
        self.sort = SortController::new(ownership);
        self
    }

    pub fn with_columns(mut self, columns: Vec<Column<R>>) -> Self {
        self.columns = columns;
        self
    }

    /// Authoritative option universe for the selector bound to `param`.
    pub fn with_options(mut self, param: &'static str, values: Vec<String>) -> Self {
        self.metadata.insert(param, values);
        self
    }

    /// Pull class and race universes for selectors that use them. Failures
    /// are logged and the selector falls back to loaded records.
    pub async fn load_metadata(&mut self, source: &dyn MetadataSource) {
        let requests = R::FILTERS.iter().filter_map(|filter| {
            let fetch = match filter.param {
                "class" => source.classes(),
                "race" => source.races(),
                _ => return None,
            };
            Some(async move { (filter.param, fetch.await) })
        });

        for (param, result) in futures::future::join_all(requests).await {
            match result {
                Ok(values) => {
                    self.metadata.insert(param, values);
                }
                Err(err) => {
                    warn!(param, error = %err, "metadata unavailable; deriving options from records");
                }
            }
        }
    }

    pub fn params(&self) -> &QueryParamSync {
        &self.params
    }

    pub fn state(&self) -> ListState<R> {
        self.controller.state()
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.current()
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Initial load for the filters currently in the URL.
    pub async fn mount(&self) -> LoadOutcome {
        self.refresh().await
    }

    pub async fn refresh(&self) -> LoadOutcome {
        self.controller.load(&self.params.snapshot()).await
    }

    /// Start reloading on every filter change. The task ends with the page.
    pub fn start_sync(&mut self) {
        if self.driver.is_some() {
            return;
        }
        let mut changes = self.params.subscribe();
        let handle = self.controller.handle();
        self.driver = Some(tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                let filters = changes.borrow_and_update().clone();
                debug!(kind = %R::KIND, "filters changed; reloading");
                drop(handle.spawn_load(filters));
            }
        }));
    }

    /// Write one filter into the URL. Reloading is the sync driver's job, or
    /// the caller's via [`ListPage::refresh`].
    pub fn apply_filter(&mut self, key: &str, value: &str) {
        self.params.update(key, value);
    }

    pub fn set_search(&mut self, value: &str) {
        self.apply_filter(SEARCH_PARAM, value);
    }

    pub fn back(&mut self) -> bool {
        self.params.back()
    }

    pub fn select_sort(&mut self, key: &str) {
        self.sort.select(&self.columns, key);
    }

    pub fn clear_sort(&mut self) {
        self.sort.clear();
    }

    pub fn sync_sort(&mut self, value: Option<SortState>) {
        self.sort.sync_external(value);
    }

    pub fn view_mode(&self) -> ListViewMode {
        self.view_mode
    }

    pub fn density(&self) -> CardDensity {
        self.density
    }

    pub fn set_view_mode(&mut self, mode: ListViewMode) -> Result<()> {
        self.view_mode = mode;
        self.preferences.set_list_view(mode)
    }

    pub fn set_density(&mut self, density: CardDensity) -> Result<()> {
        self.density = density;
        self.preferences.set_card_density(density)
    }

    pub fn render(&self) -> PageView {
        let state = self.controller.state();
        let filters = self.params.snapshot();

        let select_filters = R::FILTERS
            .iter()
            .map(|filter| SelectFilterView {
                key: filter.param.to_string(),
                label: filter.label.to_string(),
                value: filters.get(filter.param).to_string(),
                all_label: filter.all_label.to_string(),
                options: resolve_options(
                    self.metadata.get(filter.param).map(Vec::as_slice),
                    &state.records,
                    filter.field,
                ),
            })
            .collect();

        let record_filter = RecordFilter::from_state::<R>(&filters);
        let visible: Vec<R> = record_filter
            .apply(&state.records)
            .into_iter()
            .cloned()
            .collect();
        let ordered = sort_rows(&visible, &self.columns, self.sort.current());

        let body = if state.loading {
            PageBody::Loading {
                placeholders: LOADING_PLACEHOLDERS,
            }
        } else if ordered.is_empty() {
            PageBody::Empty {
                message: EMPTY_MESSAGE.to_string(),
            }
        } else {
            match self.view_mode {
                ListViewMode::Cards => {
                    PageBody::Cards(ordered.iter().map(|record| record.card()).collect())
                }
                ListViewMode::Table => PageBody::Table(self.table(&ordered)),
            }
        };

        PageView {
            kind: R::KIND,
            error: state.error.clone(),
            search_value: self.params.read(SEARCH_PARAM),
            search_placeholder: R::search_placeholder().to_string(),
            filters: select_filters,
            summary: format!(
                "Showing {} of {} {}",
                ordered.len(),
                state.total,
                R::KIND.segment()
            ),
            view_mode: self.view_mode,
            density: self.density,
            body,
        }
    }

    fn table(&self, rows: &[&R]) -> TableView {
        let headers = self
            .columns
            .iter()
            .map(|column| HeaderView {
                key: column.key.clone(),
                label: column.header.clone(),
                sortable: column.is_sortable(),
                indicator: self.sort.indicator(column),
            })
            .collect();

        let rows = rows
            .iter()
            .map(|record| RowView {
                id: record.id(),
                href: crate::routes::detail_path(R::KIND, record.id()),
                cells: self
                    .columns
                    .iter()
                    .map(|column| column.render(record))
                    .collect(),
            })
            .collect();

        TableView { headers, rows }
    }
}

impl<R: ListPresentation> Drop for ListPage<R> {
    fn drop(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.abort();
        }
    }
}
