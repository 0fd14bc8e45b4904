//! Durable presentation preferences.
//!
//! Values are plain strings under scoped keys. Reads validate the stored
//! string and fall back to the default on anything unrecognized, so a
//! corrupted or outdated store never breaks a page.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use compendium_model::{CardDensity, ListViewMode, ThemeMode};
use tracing::{debug, warn};

use crate::error::{CompendiumError, Result};

pub const CARD_DENSITY_KEY: &str = "dnd-ui-card-density";
pub const LIST_VIEW_KEY: &str = "dnd-ui-list-view";
pub const THEME_KEY: &str = "dnd-ui-theme";

pub trait PreferenceStore: Send + Sync + std::fmt::Debug {
    fn get_raw(&self, key: &str) -> Option<String>;

    fn set_raw(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| CompendiumError::Preference("store lock poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object on disk, rewritten on every change.
#[derive(Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl JsonFilePreferenceStore {
    /// Open the store at `path`. A missing file starts empty; an unreadable
    /// one is logged and also starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "ignoring malformed preferences file");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read preferences file");
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), entries = values.len(), "preferences loaded");
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| CompendiumError::Preference("store lock poisoned".into()))?;
        let mut next = values.clone();
        next.insert(key.to_string(), value.to_string());
        // Memory only changes once the file has been written.
        self.persist(&next)?;
        *values = next;
        Ok(())
    }
}

/// Typed access over a [`PreferenceStore`].
#[derive(Debug, Clone)]
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new(Arc::new(MemoryPreferenceStore::new()))
    }
}

impl Preferences {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Stored value for `key` if `validate` accepts it, else `fallback`.
    pub fn get<T>(
        &self,
        key: &str,
        validate: impl Fn(&str) -> Option<T>,
        fallback: T,
    ) -> T {
        match self.store.get_raw(key) {
            Some(raw) => validate(&raw).unwrap_or_else(|| {
                warn!(key, value = %raw, "invalid stored preference; using default");
                fallback
            }),
            None => fallback,
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!(key, value, "saving preference");
        self.store.set_raw(key, value)
    }

    pub fn card_density(&self) -> CardDensity {
        self.get(CARD_DENSITY_KEY, CardDensity::parse, CardDensity::default())
    }

    pub fn set_card_density(&self, density: CardDensity) -> Result<()> {
        self.set(CARD_DENSITY_KEY, density.as_str())
    }

    pub fn list_view(&self) -> ListViewMode {
        self.get(LIST_VIEW_KEY, ListViewMode::parse, ListViewMode::default())
    }

    pub fn set_list_view(&self, mode: ListViewMode) -> Result<()> {
        self.set(LIST_VIEW_KEY, mode.as_str())
    }

    pub fn theme(&self) -> ThemeMode {
        self.get(THEME_KEY, ThemeMode::parse, ThemeMode::default())
    }

    pub fn set_theme(&self, mode: ThemeMode) -> Result<()> {
        self.set(THEME_KEY, mode.as_str())
    }

    /// Advance light → dark → system and persist the result.
    pub fn cycle_theme(&self) -> Result<ThemeMode> {
        let next = self.theme().cycle();
        self.set_theme(next)?;
        Ok(next)
    }
}
