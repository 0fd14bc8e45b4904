use std::collections::BTreeMap;

use compendium_model::{Record, record::SEARCH_PARAM};

use crate::query::params::FilterState;

pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Constraints for one page request, independent of transport.
///
/// `text` is the raw search value (trimmed); `exact` is keyed by the URL
/// filter key (`class`, `cr`, ...). Sources decide how each maps onto
/// their own parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub skip: usize,
    pub limit: usize,
    pub text: Option<String>,
    pub exact: BTreeMap<String, String>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
            text: None,
            exact: BTreeMap::new(),
        }
    }
}

impl PageQuery {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Build the request for kind `R` from the current filter state.
    /// Keys `R` does not declare are dropped.
    pub fn from_filters<R: Record>(state: &FilterState, limit: usize) -> Self {
        let text = {
            let trimmed = state.get(SEARCH_PARAM).trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        let exact = R::FILTERS
            .iter()
            .filter_map(|filter| {
                let value = state.get(filter.param);
                (!value.is_empty())
                    .then(|| (filter.param.to_string(), value.to_string()))
            })
            .collect();

        Self {
            skip: 0,
            limit,
            text,
            exact,
        }
    }

    pub fn page(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Back to the URL-level view, used by local sources.
    pub fn to_filter_state(&self) -> FilterState {
        let text = self
            .text
            .as_ref()
            .map(|text| (SEARCH_PARAM.to_string(), text.clone()));
        FilterState::from_pairs(
            text.into_iter().chain(self.exact.clone()),
        )
    }
}
