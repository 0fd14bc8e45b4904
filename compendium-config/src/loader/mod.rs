pub mod error;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::constants::{
    APP_DIR_NAME, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT, DEFAULT_LOG_FILTER,
    ENV_API_TIMEOUT, ENV_PAGE_LIMIT, PREFERENCES_FILE_NAME,
};
use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{
    ApiConfig, Config, ConfigMetadata, CorpusConfig, ListConfig, LoggingConfig,
    PreferencesConfig,
};
use crate::util::{normalize_base_url, parse_duration};
use compendium_core::query::DEFAULT_PAGE_LIMIT;
use error::ConfigLoadError;

/// Files probed, in order, when no path is given explicitly or through
/// `COMPENDIUM_CONFIG_PATH`.
fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![
        PathBuf::from("compendium.toml"),
        PathBuf::from("config/compendium.toml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join(APP_DIR_NAME).join("config.toml"));
    }
    locations
}

pub fn default_preferences_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR_NAME}")))
        .join(PREFERENCES_FILE_NAME)
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: Vec<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env` into the process environment, then compose from the
    /// environment, the config file and defaults.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?,
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Compose from an already gathered environment, without touching
    /// `.env` or the process environment.
    pub fn load_with_env(&self, env: EnvConfig) -> Result<ConfigLoad, ConfigLoadError> {
        let (file, config_path) = self.load_file_config(&env)?;
        let mut warnings = Vec::new();
        if config_path.is_none() {
            warnings.push(
                "No compendium.toml detected; using environment variables and defaults"
                    .to_string(),
            );
        }

        let config = compose_config(file.unwrap_or_default(), env, config_path)?;
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match default_config_locations()
                .into_iter()
                .find(|candidate| candidate.exists())
            {
                Some(path) => path,
                None => return Ok((None, None)),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| {
            ConfigLoadError::Io {
                path: path.clone(),
                source,
            }
        })?;
        let file: FileConfig = toml::from_str(&contents).map_err(|source| {
            ConfigLoadError::Parse {
                path: path.clone(),
                source,
            }
        })?;
        debug!(path = %path.display(), "loaded configuration file");
        Ok((Some(file), Some(path)))
    }
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        api: file_api,
        list: file_list,
        corpus: file_corpus,
        preferences: file_preferences,
        logging: file_logging,
    } = file;

    let base_url = normalize_base_url(
        &env.api_base_url
            .or(file_api.base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
    )?;

    let raw_timeout = env
        .api_timeout
        .or(file_api.timeout)
        .unwrap_or_else(|| DEFAULT_API_TIMEOUT.to_string());
    let timeout = parse_duration(ENV_API_TIMEOUT, &raw_timeout)?;
    if timeout == Duration::ZERO {
        return Err(ConfigLoadError::InvalidValue {
            key: ENV_API_TIMEOUT,
            value: raw_timeout,
            reason: "timeout must be greater than zero",
        });
    }

    let page_limit = match env.page_limit {
        Some(raw) => raw.parse::<usize>().map_err(|_| ConfigLoadError::InvalidValue {
            key: ENV_PAGE_LIMIT,
            value: raw.clone(),
            reason: "expected a positive integer",
        })?,
        None => file_list.page_limit.unwrap_or(DEFAULT_PAGE_LIMIT),
    };
    if page_limit == 0 {
        return Err(ConfigLoadError::InvalidValue {
            key: ENV_PAGE_LIMIT,
            value: page_limit.to_string(),
            reason: "page limit must be at least 1",
        });
    }

    Ok(Config {
        api: ApiConfig {
            base_url,
            timeout,
            token: env.api_token.or(file_api.token),
        },
        list: ListConfig { page_limit },
        corpus: CorpusConfig {
            dir: env.corpus_dir.or(file_corpus.dir),
        },
        preferences: PreferencesConfig {
            path: env
                .preferences_path
                .or(file_preferences.path)
                .unwrap_or_else(default_preferences_path),
        },
        logging: LoggingConfig {
            filter: env
                .log_filter
                .or(file_logging.filter)
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        },
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded: false,
        },
    })
}
