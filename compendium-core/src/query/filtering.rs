//! Predicates that decide whether a record passes the active filters.
//!
//! The free-text query is normalized once per change and matched as a
//! case-insensitive substring; selectors are exact, case-sensitive matches
//! against the record's display value. A record passes when the query and
//! every active selector match.

use compendium_model::{FieldValue, Record, record::SEARCH_PARAM};

use crate::query::params::FilterState;

pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `normalized` must already be trimmed and lowercased.
pub fn matches_query<S: AsRef<str>>(normalized: &str, fields: &[S]) -> bool {
    if normalized.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.as_ref().to_lowercase().contains(normalized))
}

pub fn matches_selected_value(selected: &str, actual: &str) -> bool {
    selected.is_empty() || selected == actual
}

/// Compiled form of a [`FilterState`] for one record kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    query: String,
    selectors: Vec<(&'static str, String)>,
}

impl RecordFilter {
    /// Keeps `q` plus the selector keys the kind declares; unrelated query
    /// keys are ignored.
    pub fn from_state<R: Record>(state: &FilterState) -> Self {
        let selectors = R::FILTERS
            .iter()
            .filter_map(|filter| {
                let value = state.get(filter.param);
                (!value.is_empty()).then(|| (filter.field, value.to_string()))
            })
            .collect();

        Self {
            query: normalize_query(state.get(SEARCH_PARAM)),
            selectors,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.selectors.is_empty()
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if !matches_query(&self.query, &record.search_fields()) {
            return false;
        }
        self.selectors
            .iter()
            .all(|(field, selected)| selector_matches(selected, record.field(field)))
    }

    /// Matching records in input order.
    pub fn apply<'a, R: Record>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }
}

/// Numeric fields compare by value so `cr=2.0` and `cr=2` select the same
/// rows; everything else compares display strings exactly.
fn selector_matches(selected: &str, actual: Option<FieldValue>) -> bool {
    if let Some(FieldValue::Number(number)) = &actual
        && let Ok(wanted) = selected.trim().parse::<f64>()
    {
        return wanted == *number;
    }
    let actual = actual
        .map(|value| value.to_display_string())
        .unwrap_or_default();
    matches_selected_value(selected, &actual)
}
