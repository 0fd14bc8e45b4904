//! In-memory record set that filters and pages locally.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use compendium_model::{Record, RecordPage};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::source::RecordSource;
use crate::error::{CompendiumError, Result};
use crate::query::filtering::RecordFilter;
use crate::query::types::PageQuery;

#[derive(Debug, Clone)]
pub struct CorpusSource<R> {
    records: Arc<Vec<R>>,
}

impl<R: Record> CorpusSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record + DeserializeOwned> CorpusSource<R> {
    /// Load a JSON array of records.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let records: Vec<R> = serde_json::from_reader(reader)?;
        Ok(Self::new(records))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = Self::from_reader(BufReader::new(File::open(path)?))?;
        debug!(path = %path.display(), kind = %R::KIND, count = source.len(), "loaded corpus");
        Ok(source)
    }
}

#[async_trait]
impl<R: Record> RecordSource<R> for CorpusSource<R> {
    async fn fetch_page(&self, query: &PageQuery) -> Result<RecordPage<R>> {
        let filter = RecordFilter::from_state::<R>(&query.to_filter_state());
        let matching = filter.apply(&self.records);
        let total = matching.len();
        let records = matching
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .cloned()
            .collect();

        Ok(RecordPage {
            records,
            total,
            skip: query.skip,
            limit: query.limit,
        })
    }

    async fn fetch_one(&self, id: u32) -> Result<R> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| {
                CompendiumError::NotFound(format!("{} {id}", R::KIND.singular()))
            })
    }
}
