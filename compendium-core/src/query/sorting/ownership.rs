//! Who owns the sort state of a table.
//!
//! Ownership is fixed when the controller is built. An externally owned
//! sort forwards every transition to the parent and only changes when the
//! parent pushes a value back through [`SortController::sync_external`].
//! An internally owned sort applies transitions itself and notifies the
//! optional observer.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use super::columns::Column;
use super::state::{SortIndicator, SortState};

pub type SortChangeCallback = Arc<dyn Fn(Option<SortState>) + Send + Sync>;

pub enum SortOwnership {
    External {
        current: Option<SortState>,
        on_change: SortChangeCallback,
    },
    Internal {
        initial: Option<SortState>,
        on_change: Option<SortChangeCallback>,
    },
}

impl SortOwnership {
    pub fn internal(initial: Option<SortState>) -> Self {
        SortOwnership::Internal {
            initial,
            on_change: None,
        }
    }

    pub fn external<F>(current: Option<SortState>, on_change: F) -> Self
    where
        F: Fn(Option<SortState>) + Send + Sync + 'static,
    {
        SortOwnership::External {
            current,
            on_change: Arc::new(on_change),
        }
    }
}

impl fmt::Debug for SortOwnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOwnership::External { current, .. } => f
                .debug_struct("External")
                .field("current", current)
                .finish_non_exhaustive(),
            SortOwnership::Internal { initial, on_change } => f
                .debug_struct("Internal")
                .field("initial", initial)
                .field("has_observer", &on_change.is_some())
                .finish(),
        }
    }
}

pub struct SortController {
    state: Option<SortState>,
    controlled: bool,
    on_change: Option<SortChangeCallback>,
}

impl fmt::Debug for SortController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortController")
            .field("state", &self.state)
            .field("controlled", &self.controlled)
            .finish_non_exhaustive()
    }
}

impl Default for SortController {
    fn default() -> Self {
        Self::new(SortOwnership::internal(None))
    }
}

impl SortController {
    pub fn new(ownership: SortOwnership) -> Self {
        match ownership {
            SortOwnership::External { current, on_change } => Self {
                state: current,
                controlled: true,
                on_change: Some(on_change),
            },
            SortOwnership::Internal { initial, on_change } => Self {
                state: initial,
                controlled: false,
                on_change,
            },
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    pub fn current(&self) -> Option<&SortState> {
        self.state.as_ref()
    }

    /// Header click on `key`. Ignored unless `key` is a sortable column.
    pub fn select<Row>(&mut self, columns: &[Column<Row>], key: &str) {
        let sortable = columns
            .iter()
            .any(|column| column.key == key && column.is_sortable());
        if !sortable {
            return;
        }
        let next = SortState::toggle(self.state.as_ref(), key);
        self.transition(Some(next));
    }

    /// Back to source order.
    pub fn clear(&mut self) {
        self.transition(None);
    }

    /// Parent pushes a new value into an externally owned sort.
    pub fn sync_external(&mut self, value: Option<SortState>) {
        if !self.controlled {
            warn!("ignoring external sort value for an internally owned table");
            return;
        }
        self.state = value;
    }

    pub fn indicator<Row>(&self, column: &Column<Row>) -> SortIndicator {
        SortIndicator::for_column(
            self.state.as_ref(),
            &column.key,
            column.is_sortable(),
        )
    }

    fn transition(&mut self, next: Option<SortState>) {
        if !self.controlled {
            self.state = next.clone();
        }
        if let Some(on_change) = &self.on_change {
            on_change(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn columns() -> Vec<Column<u32>> {
        vec![
            Column::new("value", "Value", |row: &u32| row.to_string()).sortable(),
            Column::new("label", "Label", |_: &u32| String::new()),
        ]
    }

    #[test]
    fn internal_sort_updates_itself_and_notifies() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut sort = SortController::new(SortOwnership::Internal {
            initial: None,
            on_change: Some(Arc::new(move |next| {
                if let Ok(mut guard) = sink.lock() {
                    guard.push(next);
                }
            })),
        });

        sort.select(&columns(), "value");
        assert_eq!(sort.current(), Some(&SortState::asc("value")));
        sort.select(&columns(), "value");
        assert_eq!(sort.current(), Some(&SortState::desc("value")));

        let seen = seen.lock().expect("observer lock");
        assert_eq!(
            *seen,
            vec![Some(SortState::asc("value")), Some(SortState::desc("value"))]
        );
    }

    #[test]
    fn external_sort_only_moves_when_parent_syncs() {
        let requested = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&requested);
        let mut sort = SortController::new(SortOwnership::external(
            Some(SortState::asc("value")),
            move |next| {
                if let Ok(mut guard) = sink.lock() {
                    *guard = next;
                }
            },
        ));

        sort.select(&columns(), "value");
        assert_eq!(sort.current(), Some(&SortState::asc("value")));
        let pushed = requested.lock().expect("callback lock").clone();
        assert_eq!(pushed, Some(SortState::desc("value")));

        sort.sync_external(pushed);
        assert_eq!(sort.current(), Some(&SortState::desc("value")));
    }

    #[test]
    fn static_columns_ignore_selection() {
        let mut sort = SortController::default();
        sort.select(&columns(), "label");
        sort.select(&columns(), "unknown");
        assert_eq!(sort.current(), None);
    }

    #[test]
    fn clear_returns_to_source_order() {
        let mut sort =
            SortController::new(SortOwnership::internal(Some(SortState::desc("value"))));
        sort.clear();
        assert_eq!(sort.current(), None);
    }
}
