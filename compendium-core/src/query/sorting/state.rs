use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active column and direction. `None` at the use site means source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    pub fn asc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Next state after selecting `key`: the active key flips direction,
    /// any other key starts ascending.
    pub fn toggle(current: Option<&SortState>, key: &str) -> SortState {
        match current {
            Some(state) if state.key == key => {
                SortState::new(key, state.direction.flip())
            }
            _ => SortState::asc(key),
        }
    }
}

/// Header indicator for one column (`aria-sort`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Ascending,
    Descending,
    None,
}

impl SortIndicator {
    pub fn for_column(
        current: Option<&SortState>,
        key: &str,
        sortable: bool,
    ) -> Self {
        match current {
            Some(state) if sortable && state.key == key => {
                match state.direction {
                    SortDirection::Asc => SortIndicator::Ascending,
                    SortDirection::Desc => SortIndicator::Descending,
                }
            }
            _ => SortIndicator::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortIndicator::Ascending => "ascending",
            SortIndicator::Descending => "descending",
            SortIndicator::None => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_key_starts_ascending() {
        let current = SortState::desc("name");
        assert_eq!(
            SortState::toggle(Some(&current), "cr"),
            SortState::asc("cr")
        );
        assert_eq!(SortState::toggle(None, "cr"), SortState::asc("cr"));
    }

    #[test]
    fn active_key_flips_direction() {
        let asc = SortState::asc("name");
        let desc = SortState::toggle(Some(&asc), "name");
        assert_eq!(desc, SortState::desc("name"));
        assert_eq!(SortState::toggle(Some(&desc), "name"), asc);
    }

    #[test]
    fn indicator_only_marks_active_sortable_column() {
        let state = SortState::desc("cr");
        assert_eq!(
            SortIndicator::for_column(Some(&state), "cr", true),
            SortIndicator::Descending
        );
        assert_eq!(
            SortIndicator::for_column(Some(&state), "cr", false),
            SortIndicator::None
        );
        assert_eq!(
            SortIndicator::for_column(Some(&state), "name", true),
            SortIndicator::None
        );
    }
}
