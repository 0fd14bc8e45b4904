//! Stable ordering of borrowed rows.
//!
//! Sorting never touches the input slice; it returns references in the
//! requested order. Ties keep their input order.

use tracing::warn;

use super::columns::Column;
use super::keys::{SortValue, compare_values};
use super::state::SortState;

/// Order `rows` by the active column. Without a state, or when the key does
/// not name a sortable column, rows stay in source order.
pub fn sort_rows<'a, Row>(
    rows: &'a [Row],
    columns: &[Column<Row>],
    state: Option<&SortState>,
) -> Vec<&'a Row> {
    let Some(state) = state else {
        return rows.iter().collect();
    };

    let Some(column) = columns
        .iter()
        .find(|column| column.key == state.key && column.is_sortable())
    else {
        if !columns.iter().any(|column| column.key == state.key) {
            warn!(key = %state.key, "sort key matches no column; keeping source order");
        }
        return rows.iter().collect();
    };

    let direction = state.direction;
    let mut keyed: Vec<(SortValue, &'a Row)> = rows
        .iter()
        .filter_map(|row| column.sort_value(row).map(|value| (value, row)))
        .collect();

    // `sort_by` is stable, so equal keys keep input order.
    keyed.sort_by(|(a, _), (b, _)| compare_values(a, b, direction));
    keyed.into_iter().map(|(_, row)| row).collect()
}
