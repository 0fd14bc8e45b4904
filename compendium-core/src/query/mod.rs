pub mod filtering;
pub mod options;
pub mod params;
pub mod sorting;
pub mod types;

pub use filtering::{RecordFilter, matches_query, matches_selected_value, normalize_query};
pub use options::{FilterOption, resolve_options, to_filter_options, unique_values};
pub use params::{FilterState, HistoryMode, QueryParamSync};
pub use sorting::*;
pub use types::*;
