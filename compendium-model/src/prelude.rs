//! Snapshot of the types surface for list and detail pages.
//! Prefer importing from this module instead of individual tree nodes when
//! working in presentation layers.

pub use super::character::Character;
pub use super::field::FieldValue;
pub use super::item::Item;
pub use super::monster::{
    Monster, MonsterAbility, MonsterAction, MonsterSenses, MonsterSpeed,
};
pub use super::preferences::{
    CardDensity, ListViewMode, ResolvedTheme, ThemeMode,
};
pub use super::record::{FilterField, Record, RecordKind, SEARCH_PARAM};
pub use super::responses::RecordPage;
pub use super::stats::AbilityScores;
