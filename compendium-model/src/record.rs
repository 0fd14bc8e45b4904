use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::field::FieldValue;

/// The three catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RecordKind {
    Characters,
    Items,
    Monsters,
}

impl RecordKind {
    pub fn all() -> &'static [RecordKind] {
        &[RecordKind::Characters, RecordKind::Items, RecordKind::Monsters]
    }

    /// Path segment used both by the API and by page routes.
    pub fn segment(&self) -> &'static str {
        match self {
            RecordKind::Characters => "characters",
            RecordKind::Items => "items",
            RecordKind::Monsters => "monsters",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            RecordKind::Characters => "character",
            RecordKind::Items => "item",
            RecordKind::Monsters => "monster",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for RecordKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "characters" | "character" => Ok(RecordKind::Characters),
            "items" | "item" => Ok(RecordKind::Items),
            "monsters" | "monster" => Ok(RecordKind::Monsters),
            other => Err(ModelError::UnknownKind(other.to_string())),
        }
    }
}

/// Binds a URL query key to the record field it constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    /// Key in the page URL (`class`, `cr`, ...).
    pub param: &'static str,
    /// Field name passed to [`Record::field`].
    pub field: &'static str,
    /// Selector label.
    pub label: &'static str,
    /// Label of the "no constraint" option.
    pub all_label: &'static str,
}

/// Free-text search key shared by every list page.
pub const SEARCH_PARAM: &str = "q";

/// Fixed-shape catalog row.
///
/// Records are immutable once fetched. Everything that filters or orders
/// them goes through [`Record::field`] so the query engine stays generic.
pub trait Record: Clone + Send + Sync + 'static {
    const KIND: RecordKind;

    /// Exact-match selectors offered on the list page.
    const FILTERS: &'static [FilterField];

    fn id(&self) -> u32;

    fn name(&self) -> &str;

    /// Look a field up by its wire name.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Text fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn filter_for_param(param: &str) -> Option<&'static FilterField> {
        Self::FILTERS.iter().find(|filter| filter.param == param)
    }
}
