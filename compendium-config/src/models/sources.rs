use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    ENV_API_BASE_URL, ENV_API_TIMEOUT, ENV_API_TOKEN, ENV_CONFIG_PATH,
    ENV_CORPUS_DIR, ENV_LOG, ENV_PAGE_LIMIT, ENV_PREFERENCES_PATH, ENV_RUST_LOG,
};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub list: FileListConfig,
    #[serde(default)]
    pub corpus: FileCorpusConfig,
    #[serde(default)]
    pub preferences: FilePreferencesConfig,
    #[serde(default)]
    pub logging: FileLoggingConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Human-readable duration such as `30s` or `1m 30s`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileListConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorpusConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FilePreferencesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileLoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Environment-derived configuration values.
///
/// Values are kept raw; parsing and validation happen when the loader
/// composes the final [`crate::Config`].
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub api_base_url: Option<String>,
    pub api_timeout: Option<String>,
    pub api_token: Option<String>,
    pub page_limit: Option<String>,
    pub preferences_path: Option<PathBuf>,
    pub corpus_dir: Option<PathBuf>,
    pub log_filter: Option<String>,
    pub config_path: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            api_base_url: var(ENV_API_BASE_URL),
            api_timeout: var(ENV_API_TIMEOUT),
            api_token: var(ENV_API_TOKEN),
            page_limit: var(ENV_PAGE_LIMIT),
            preferences_path: var(ENV_PREFERENCES_PATH).map(PathBuf::from),
            corpus_dir: var(ENV_CORPUS_DIR).map(PathBuf::from),
            log_filter: var(ENV_LOG).or_else(|| var(ENV_RUST_LOG)),
            config_path: var(ENV_CONFIG_PATH).map(PathBuf::from),
        }
    }
}
