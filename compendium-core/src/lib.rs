//! Query, filter and sort engine for the Compendium catalog, plus the list
//! and detail state built on top of it.
#![allow(missing_docs)]

pub mod api;
pub mod detail;
pub mod error;
pub mod list;
pub mod preferences;
pub mod query;
pub mod requests;
pub mod routes;

pub use compendium_model as model;

pub use api::{
    ApiClient, ApiRecord, CorpusSource, MetadataSource, RecordSource,
};
pub use detail::{DetailController, DetailState};
pub use error::{CompendiumError, Result};
pub use list::{
    ListController, ListPage, ListPresentation, ListState, LoadOutcome,
    PageBody, PageView,
};
pub use preferences::{
    JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore,
    Preferences,
};
pub use query::{FilterState, HistoryMode, PageQuery, QueryParamSync};
