use async_trait::async_trait;
use compendium_model::{Record, RecordPage};

use crate::error::Result;
use crate::query::types::PageQuery;

/// Paginated, filterable read access to one record kind.
///
/// Futures returned here are dropped when a newer request supersedes them,
/// so implementations must not rely on running to completion.
#[async_trait]
pub trait RecordSource<R: Record>: Send + Sync {
    async fn fetch_page(&self, query: &PageQuery) -> Result<RecordPage<R>>;

    async fn fetch_one(&self, id: u32) -> Result<R>;
}

/// Authoritative value universes for selectors that have them.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn classes(&self) -> Result<Vec<String>>;

    async fn races(&self) -> Result<Vec<String>>;
}
