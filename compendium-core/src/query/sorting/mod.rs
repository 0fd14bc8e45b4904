//! Table sorting: comparison keys, the toggle state machine, column
//! descriptors and the stable sort over borrowed rows.

pub mod columns;
pub mod engine;
pub mod keys;
pub mod ownership;
pub mod state;

pub use columns::{Column, RenderFn, SortValueFn};
pub use engine::sort_rows;
pub use keys::{SortValue, compare_values, natural_cmp};
pub use ownership::{SortChangeCallback, SortController, SortOwnership};
pub use state::{SortDirection, SortIndicator, SortState};
