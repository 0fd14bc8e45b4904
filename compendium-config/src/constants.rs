pub const DEFAULT_API_BASE_URL: &str = compendium_core::api::DEFAULT_API_BASE_URL;
pub const DEFAULT_API_TIMEOUT: &str = "30s";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
pub const APP_DIR_NAME: &str = "compendium";

pub const ENV_API_BASE_URL: &str = "COMPENDIUM_API_BASE_URL";
pub const ENV_API_TIMEOUT: &str = "COMPENDIUM_API_TIMEOUT";
pub const ENV_API_TOKEN: &str = "COMPENDIUM_API_TOKEN";
pub const ENV_PAGE_LIMIT: &str = "COMPENDIUM_PAGE_LIMIT";
pub const ENV_PREFERENCES_PATH: &str = "COMPENDIUM_PREFERENCES_PATH";
pub const ENV_CORPUS_DIR: &str = "COMPENDIUM_CORPUS_DIR";
pub const ENV_LOG: &str = "COMPENDIUM_LOG";
pub const ENV_RUST_LOG: &str = "RUST_LOG";
pub const ENV_CONFIG_PATH: &str = "COMPENDIUM_CONFIG_PATH";
