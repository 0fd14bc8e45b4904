//! Core data model definitions shared across Compendium crates.
#![allow(missing_docs)]

pub mod character;
pub mod error;
pub mod field;
pub mod item;
pub mod monster;
pub mod preferences;
pub mod prelude;
pub mod record;
pub mod responses;
pub mod stats;

// Intentionally curated re-exports for downstream consumers.
pub use character::Character;
pub use error::{ModelError, Result as ModelResult};
pub use field::FieldValue;
pub use item::Item;
pub use monster::{
    Monster, MonsterAbility, MonsterAction, MonsterSenses, MonsterSpeed,
};
pub use preferences::{CardDensity, ListViewMode, ResolvedTheme, ThemeMode};
pub use record::{FilterField, Record, RecordKind};
pub use responses::{
    CharactersResponse, ClassesResponse, ItemsResponse, MonstersResponse,
    RacesResponse, RecordPage,
};
pub use stats::AbilityScores;
