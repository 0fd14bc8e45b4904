pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use compendium_core::model::RecordKind;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub corpus: CorpusConfig,
    pub preferences: PreferencesConfig,
    pub logging: LoggingConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ListConfig {
    pub page_limit: usize,
}

/// Local JSON corpora that replace the API for list and detail pages.
#[derive(Debug, Clone, Default)]
pub struct CorpusConfig {
    pub dir: Option<PathBuf>,
}

impl CorpusConfig {
    /// `<dir>/<kind>.json`, when a corpus directory is configured and the
    /// file exists.
    pub fn path_for(&self, kind: RecordKind) -> Option<PathBuf> {
        let path = self.dir.as_ref()?.join(format!("{}.json", kind.segment()));
        path.exists().then_some(path)
    }
}

#[derive(Debug, Clone)]
pub struct PreferencesConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
