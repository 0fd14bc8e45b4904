//! Shared configuration library for Compendium.
//!
//! Loads settings from a TOML file, `COMPENDIUM_*` environment variables and
//! an optional `.env` file (environment wins over the file, the file over
//! built-in defaults), installs the tracing subscriber, and renders list and
//! detail pages for the `compendium` terminal client.

pub mod constants;
pub mod loader;
pub mod models;
pub mod render;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::{
    ApiConfig, Config, ConfigMetadata, CorpusConfig, ListConfig, LoggingConfig,
    PreferencesConfig,
};
